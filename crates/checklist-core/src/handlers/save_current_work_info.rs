use chrono::Utc;
use tracing::info;

use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;
use crate::tree;
use crate::validators::{validate_session_id, validate_work_description, validate_work_summarize};
use crate::work_info::WorkInfo;
use crate::workid::WorkIdGenerator;

/// Save a work-context snapshot, reusing the caller's workId on resave.
///
/// If `sessionId` is given and already has an associated workId, that id is
/// reused and the prior record is overwritten in place; otherwise a fresh
/// workId is generated. When `sessionId` is given and that session currently
/// holds a non-empty forest, a deep copy of it is embedded as `work_tasks` so
/// later mutation of the live session can never change what was saved.
pub fn save_current_work_info(
    registry: &NamespaceRegistry,
    work_ids: &WorkIdGenerator,
    ctx: &RequestContext,
    work_summarize: &str,
    work_description: &str,
    session_id: Option<&str>,
) -> Result<Vec<String>, CoreError> {
    let work_summarize = validate_work_summarize(work_summarize)?;
    let work_description = validate_work_description(work_description)?;
    let session_id = session_id.map(validate_session_id).transpose()?;

    registry.with_namespace(&ctx.namespace, |ns| {
        // The session store is only touched to read/record the workId
        // association and to clone out a snapshot; the lock is dropped here,
        // before the work-info store's lock is taken below, so a single code
        // path never holds both stores' locks at once.
        let (work_id, work_tasks) = {
            let mut sessions = ns.sessions.lock().unwrap_or_else(|p| p.into_inner());

            let existing_assoc = session_id
                .as_deref()
                .and_then(|sid| sessions.get(sid))
                .and_then(|entry| entry.assoc_work_id.clone());

            let work_id = match existing_assoc {
                Some(work_id) => work_id,
                None => work_ids.generate()?,
            };

            // Recording the association creates an empty-forest entry on
            // first touch, so the association survives even when the
            // session has never been seen by `update_tasks`.
            let snapshot = session_id.as_deref().and_then(|sid| {
                sessions.upsert_with(sid, |entry| {
                    entry.assoc_work_id = Some(work_id.clone());
                });
                sessions.get(sid).map(|entry| entry.forest.clone())
            });

            let work_tasks = snapshot
                .filter(|forest| !forest.is_empty())
                .map(|forest| tree::deep_copy_forest(&forest));

            (work_id, work_tasks)
        };

        let had_forest = work_tasks.is_some();

        let mut work_infos = ns.work_infos.lock().unwrap_or_else(|p| p.into_inner());
        work_infos.set(WorkInfo {
            work_id: work_id.clone(),
            work_timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            work_description,
            work_summarize,
            session_id: session_id.clone(),
            work_tasks,
        });

        info!(
            event = "core.work_info.saved",
            namespace = %ctx.namespace,
            work_id = %work_id,
            session_id = ?session_id,
        );

        let mut parts = vec![format!("Successfully saved work information with workId: {work_id}")];
        if let Some(sid) = &session_id {
            parts.push(if had_forest {
                format!("Captured a snapshot of the current tasks for session {sid}.")
            } else {
                format!("Warning: no tasks exist yet for session {sid}; no snapshot was captured.")
            });
        }
        Ok(parts)
    })
}
