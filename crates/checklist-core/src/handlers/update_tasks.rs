use tracing::info;

use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;
use crate::tree::{self, Task};
use crate::validators::{validate_path, validate_session_id};

/// Replace the children at `path` in a session's task forest with `tasks`,
/// creating the session if this is its first update. An unresolved path is a
/// silent no-op: the forest is returned unchanged and the call still succeeds.
pub fn update_tasks(
    registry: &NamespaceRegistry,
    ctx: &RequestContext,
    session_id: &str,
    path: &str,
    tasks: Vec<Task>,
) -> Result<Vec<String>, CoreError> {
    let session_id = validate_session_id(session_id)?;
    let (_, segments) = validate_path(path)?;

    for task in &tasks {
        tree::validate_task_tree(task)?;
    }
    tree::check_no_duplicate_ids(&tasks)?;

    let submitted_count = tasks.len();

    let rendered = registry.with_namespace(&ctx.namespace, |ns| {
        let mut sessions = ns.sessions.lock().unwrap_or_else(|p| p.into_inner());
        sessions.upsert_with(&session_id, |entry| {
            entry.forest = tree::update_at_path(&entry.forest, &segments, tasks);
        });
        let entry = sessions.get(&session_id).expect("just upserted");
        tree::format_tree(&entry.forest)
    });

    info!(
        event = "core.tasks.updated",
        namespace = %ctx.namespace,
        session_id = %session_id,
        path,
        submitted_count,
    );

    Ok(vec![
        format!("Successfully updated {submitted_count} top-level task(s) for session {session_id}."),
        rendered,
    ])
}
