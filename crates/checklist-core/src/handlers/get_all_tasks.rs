use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;
use crate::tree;
use crate::validators::validate_session_id;

/// Render the current task forest for a session.
///
/// A session with no forest is not an error — it returns an informational
/// text part instead.
pub fn get_all_tasks(
    registry: &NamespaceRegistry,
    ctx: &RequestContext,
    session_id: &str,
) -> Result<Vec<String>, CoreError> {
    let session_id = validate_session_id(session_id)?;

    let rendered = registry.with_namespace(&ctx.namespace, |ns| {
        let mut sessions = ns.sessions.lock().unwrap_or_else(|p| p.into_inner());
        sessions.get(&session_id).map(|entry| tree::format_tree(&entry.forest))
    });

    match rendered {
        Some(rendered) => Ok(vec![rendered]),
        None => Ok(vec![format!("No tasks found for session {session_id}.")]),
    }
}
