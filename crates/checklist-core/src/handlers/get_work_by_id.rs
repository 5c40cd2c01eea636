use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;
use crate::validators::validate_work_id;

/// Fetch a previously saved work-info record by its workId. A hit promotes
/// the record to most-recent in its namespace's work-info store.
pub fn get_work_by_id(
    registry: &NamespaceRegistry,
    ctx: &RequestContext,
    work_id: &str,
) -> Result<Vec<String>, CoreError> {
    let work_id = validate_work_id(work_id)?;

    let found = registry.with_namespace(&ctx.namespace, |ns| {
        ns.work_infos
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .get(&work_id)
            .cloned()
    });

    let info = found.ok_or_else(|| CoreError::WorkNotFound(work_id.clone()))?;

    Ok(vec![
        serde_json::to_string(&info).expect("WorkInfo always serializes"),
    ])
}
