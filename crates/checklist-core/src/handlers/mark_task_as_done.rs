use tracing::info;

use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;
use crate::tree;
use crate::validators::{validate_session_id, validate_task_id};

/// Mark a task DONE by id, leaving its descendants untouched.
pub fn mark_task_as_done(
    registry: &NamespaceRegistry,
    ctx: &RequestContext,
    session_id: &str,
    task_id: &str,
) -> Result<Vec<String>, CoreError> {
    let session_id = validate_session_id(session_id)?;
    let task_id = validate_task_id(task_id)?;

    registry.with_namespace(&ctx.namespace, |ns| {
        let mut sessions = ns.sessions.lock().unwrap_or_else(|p| p.into_inner());

        let entry = sessions
            .get(&session_id)
            .ok_or_else(|| CoreError::SessionNotFound(session_id.clone()))?;

        if tree::find_by_id(&entry.forest, &task_id).is_none() {
            return Err(CoreError::TaskNotFound(task_id.clone()));
        }

        let mut entry = entry.clone();
        tree::mark_done(&mut entry.forest, &task_id);
        let rendered = tree::format_tree(&entry.forest);
        sessions.set(&session_id, entry);

        info!(
            event = "core.tasks.marked_done",
            namespace = %ctx.namespace,
            session_id = %session_id,
            task_id = %task_id,
        );

        Ok(vec![
            format!("Successfully marked task {task_id} as done for session {session_id}."),
            rendered,
        ])
    })
}
