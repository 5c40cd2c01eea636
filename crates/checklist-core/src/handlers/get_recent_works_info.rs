use serde_json::json;

use crate::context::RequestContext;
use crate::errors::CoreError;
use crate::namespace::NamespaceRegistry;

/// List saved work-info records most-recent-first. Listing never promotes an
/// entry, so it has no effect on LRU order.
pub fn get_recent_works_info(
    registry: &NamespaceRegistry,
    ctx: &RequestContext,
) -> Result<Vec<String>, CoreError> {
    let works = registry.with_namespace(&ctx.namespace, |ns| {
        ns.work_infos
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .recent_list()
    });

    let body = json!({ "works": works });
    Ok(vec![
        serde_json::to_string(&body).expect("WorkSummary list always serializes"),
        "Use get_work_by_id with a workId above to fetch its full details.".to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfig;
    use crate::handlers::save_current_work_info::save_current_work_info;
    use crate::workid::WorkIdGenerator;

    fn registry() -> (NamespaceRegistry, WorkIdGenerator) {
        (
            NamespaceRegistry::new(CoreConfig::default()),
            WorkIdGenerator::new(),
        )
    }

    #[test]
    fn lists_saved_works_most_recent_first() {
        let (reg, ids) = registry();
        let ctx = RequestContext::default();
        save_current_work_info(&reg, &ids, &ctx, "sum1", "desc1", None).unwrap();
        save_current_work_info(&reg, &ids, &ctx, "sum2", "desc2", None).unwrap();

        let parts = get_recent_works_info(&reg, &ctx).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&parts[0]).unwrap();
        let works = parsed["works"].as_array().unwrap();
        assert_eq!(works.len(), 2);
        assert_eq!(works[0]["work_description"], "desc2");
        // summary/snapshot are never exposed through the listing.
        assert!(works[0].get("work_summarize").is_none());
    }

    #[test]
    fn empty_store_lists_no_works() {
        let (reg, _ids) = registry();
        let ctx = RequestContext::default();
        let parts = get_recent_works_info(&reg, &ctx).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&parts[0]).unwrap();
        assert!(parsed["works"].as_array().unwrap().is_empty());
    }
}
