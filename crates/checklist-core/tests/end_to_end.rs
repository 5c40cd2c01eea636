//! End-to-end coverage of the six tool handlers through [`ChecklistEngine`],
//! exercising the literal scenarios this crate's design notes are built
//! against.

use checklist_core::{ChecklistEngine, CoreConfig, RequestContext, Task, TaskStatus};

fn task(id: &str, desc: &str, children: Vec<Task>) -> Task {
    Task {
        task_id: id.to_string(),
        description: desc.to_string(),
        status: TaskStatus::Todo,
        children,
    }
}

#[test]
fn s1_basic_create_mark_read() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    let parts = engine.update_tasks(
        &ctx,
        "s1",
        "/",
        vec![
            task("a", "A", vec![]),
            task("b", "B", vec![task("b1", "B1", vec![])]),
        ],
    );
    assert!(parts[1].contains("├── ○ a: A"));
    assert!(parts[1].contains("└── ○ b: B"));
    assert!(parts[1].contains("    └── ○ b1: B1"));

    let parts = engine.mark_task_as_done(&ctx, "s1", "b1");
    assert!(parts[1].contains("    └── ✓ b1: B1"));
    assert!(parts[1].contains("└── ○ b: B"));

    let parts = engine.get_all_tasks(&ctx, "s1");
    assert!(parts[0].contains("✓ b1: B1"));
    assert!(parts[0].contains("○ b: B"));
}

#[test]
fn s2_path_scoped_update_replaces_only_matched_subtree() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    engine.update_tasks(
        &ctx,
        "s1",
        "/",
        vec![
            task("a", "A", vec![]),
            task("b", "B", vec![task("b1", "B1", vec![])]),
        ],
    );
    let parts = engine.update_tasks(&ctx, "s1", "/b/", vec![task("b2", "B2", vec![])]);
    assert!(parts[1].contains("a: A"));
    assert!(parts[1].contains("b2: B2"));
    assert!(!parts[1].contains("b1"));
}

#[test]
fn s3_duplicate_rejection() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    let parts = engine.update_tasks(
        &ctx,
        "s2",
        "/",
        vec![task("x", "X", vec![]), task("x", "X2", vec![])],
    );
    assert_eq!(parts.len(), 1);
    assert!(parts[0].contains("duplicate taskId"));
    assert!(parts[0].contains("x"));
}

#[test]
fn s4_snapshot_isolation() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    engine.update_tasks(&ctx, "s3", "/", vec![task("t", "T", vec![])]);
    let parts = engine.save_current_work_info(&ctx, "sum", "desc", Some("s3"));
    let work_id = parts[0].rsplit(": ").next().unwrap().to_string();

    engine.mark_task_as_done(&ctx, "s3", "t");

    let parts = engine.get_work_by_id(&ctx, &work_id);
    let parsed: serde_json::Value = serde_json::from_str(&parts[0]).unwrap();
    assert_eq!(parsed["work_tasks"][0]["status"], "TODO");
}

#[test]
fn s5_session_id_overwrite() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    let first = engine.save_current_work_info(&ctx, "sum1", "desc1", Some("s4"));
    let second = engine.save_current_work_info(&ctx, "sum2", "desc2", Some("s4"));
    assert_eq!(first[0], second[0]);

    let parts = engine.get_recent_works_info(&ctx);
    let parsed: serde_json::Value = serde_json::from_str(&parts[0]).unwrap();
    let works = parsed["works"].as_array().unwrap();
    assert_eq!(works.len(), 1);
    assert_eq!(works[0]["work_description"], "desc2");
}

#[test]
fn s6_session_lru_eviction() {
    let engine = ChecklistEngine::new(CoreConfig {
        max_sessions: 3,
        max_namespaces: 32,
    });
    let ctx = RequestContext::default();

    engine.update_tasks(&ctx, "s1", "/", vec![task("a", "A", vec![])]);
    engine.update_tasks(&ctx, "s2", "/", vec![task("a", "A", vec![])]);
    engine.update_tasks(&ctx, "s3", "/", vec![task("a", "A", vec![])]);
    engine.get_all_tasks(&ctx, "s1"); // promote s1
    engine.update_tasks(&ctx, "s4", "/", vec![task("a", "A", vec![])]);

    let parts = engine.get_all_tasks(&ctx, "s2");
    assert_eq!(parts, vec!["No tasks found for session s2.".to_string()]);

    for sid in ["s1", "s3", "s4"] {
        let parts = engine.get_all_tasks(&ctx, sid);
        assert!(parts[0].contains("a: A"));
    }
}

#[test]
fn s7_work_info_eviction_at_capacity_10() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let ctx = RequestContext::default();

    let mut work_ids = Vec::new();
    for i in 1..=12 {
        let parts = engine.save_current_work_info(&ctx, &format!("sum{i}"), &format!("desc{i}"), None);
        work_ids.push(parts[0].rsplit(": ").next().unwrap().to_string());
    }

    let parts = engine.get_work_by_id(&ctx, &work_ids[0]);
    assert!(parts[0].starts_with("Error:"));
    assert!(parts[0].contains("work info not found"));

    let parts = engine.get_work_by_id(&ctx, &work_ids[10]);
    assert!(!parts[0].starts_with("Error:"));

    let parts = engine.get_recent_works_info(&ctx);
    let parsed: serde_json::Value = serde_json::from_str(&parts[0]).unwrap();
    let works = parsed["works"].as_array().unwrap();
    assert_eq!(works.len(), 10);
    assert_eq!(works[0]["workId"], work_ids[11]);
}

#[test]
fn s8_namespace_isolation() {
    let engine = ChecklistEngine::new(CoreConfig::default());
    let team_a = RequestContext::new("teamA");
    let team_b = RequestContext::new("teamB");

    engine.update_tasks(&team_a, "s1", "/", vec![task("a", "A", vec![])]);
    engine.update_tasks(&team_b, "s1", "/", vec![task("z", "Z", vec![])]);

    let parts = engine.get_all_tasks(&team_a, "s1");
    assert!(parts[0].contains("a: A"));
    assert!(!parts[0].contains("z: Z"));

    let parts = engine.get_all_tasks(&team_b, "s1");
    assert!(parts[0].contains("z: Z"));
    assert!(!parts[0].contains("a: A"));
}

#[test]
fn s9_namespace_eviction_never_touches_default() {
    let engine = ChecklistEngine::new(CoreConfig {
        max_sessions: 100,
        max_namespaces: 1,
    });
    let default_ctx = RequestContext::default();
    engine.update_tasks(&default_ctx, "s0", "/", vec![task("a", "A", vec![])]);

    let team_a = RequestContext::new("teamA");
    let team_b = RequestContext::new("teamB");
    engine.update_tasks(&team_a, "s1", "/", vec![task("a", "A", vec![])]);
    engine.update_tasks(&team_b, "s1", "/", vec![task("a", "A", vec![])]);

    // teamA (least-recently-touched non-default namespace) was evicted.
    let parts = engine.get_all_tasks(&team_a, "s1");
    assert_eq!(parts, vec!["No tasks found for session s1.".to_string()]);

    // default survives untouched despite being the oldest namespace overall.
    let parts = engine.get_all_tasks(&default_ctx, "s0");
    assert!(parts[0].contains("a: A"));
}
