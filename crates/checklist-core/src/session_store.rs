//! The session-LRU specialization: sessionId -> (task forest, optional workId
//! association).

use tracing::debug;

use crate::lru::LruStore;
use crate::tree::Forest;

/// One session's state: its task forest and, if `save_current_work_info` has
/// been called for it, the workId it is currently associated with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEntry {
    pub forest: Forest,
    pub assoc_work_id: Option<String>,
}

/// Bounded LRU map of sessionId -> [`SessionEntry`], capacity from
/// [`crate::config::CoreConfig::max_sessions`].
pub struct SessionStore {
    inner: LruStore<String, SessionEntry>,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruStore::new(capacity),
        }
    }

    /// Non-promoting membership check.
    pub fn has(&self, session_id: &str) -> bool {
        self.inner.has(&session_id.to_string())
    }

    /// Promoting fetch of a session's forest, if present.
    pub fn get(&mut self, session_id: &str) -> Option<&SessionEntry> {
        self.inner.get(&session_id.to_string())
    }

    /// Insert or update a session's entry, creating it if absent. Promotes.
    pub fn set(&mut self, session_id: &str, entry: SessionEntry) {
        let is_new = !self.inner.has(&session_id.to_string());
        self.inner.set(session_id.to_string(), entry);
        if is_new {
            debug!(event = "core.session.created", session_id);
        }
    }

    /// Fetch-or-create an entry, applying `mutate` to it, and store the
    /// result back (promotes either way). Used by `update_tasks` and
    /// `mark_task_as_done` to avoid duplicating the create-if-absent logic.
    pub fn upsert_with(&mut self, session_id: &str, mutate: impl FnOnce(&mut SessionEntry)) {
        let key = session_id.to_string();
        let is_new = !self.inner.has(&key);
        let mut entry = self.inner.get(&key).cloned().unwrap_or_default();
        mutate(&mut entry);
        self.inner.set(key, entry);
        if is_new {
            debug!(event = "core.session.created", session_id);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Task, TaskStatus};

    fn task(id: &str) -> Task {
        Task {
            task_id: id.to_string(),
            description: "d".to_string(),
            status: TaskStatus::Todo,
            children: Vec::new(),
        }
    }

    #[test]
    fn upsert_creates_then_updates_same_entry() {
        let mut store = SessionStore::new(10);
        store.upsert_with("s1", |e| e.forest.push(task("a")));
        assert_eq!(store.len(), 1);
        store.upsert_with("s1", |e| e.forest.push(task("b")));
        assert_eq!(store.len(), 1);
        let entry = store.get("s1").unwrap();
        assert_eq!(entry.forest.len(), 2);
    }

    #[test]
    fn eviction_removes_least_recently_touched_session() {
        let mut store = SessionStore::new(2);
        store.upsert_with("s1", |_| {});
        store.upsert_with("s2", |_| {});
        store.upsert_with("s3", |_| {});
        assert!(!store.has("s1"));
        assert!(store.has("s2") && store.has("s3"));
    }

    #[test]
    fn get_promotes_session_against_eviction() {
        let mut store = SessionStore::new(2);
        store.upsert_with("s1", |_| {});
        store.upsert_with("s2", |_| {});
        store.get("s1");
        store.upsert_with("s3", |_| {});
        assert!(store.has("s1"));
        assert!(!store.has("s2"));
    }

    #[test]
    fn eviction_drops_forest_and_association_together() {
        let mut store = SessionStore::new(1);
        store.upsert_with("s1", |e| {
            e.forest.push(task("a"));
            e.assoc_work_id = Some("12345678".to_string());
        });
        store.upsert_with("s2", |_| {});
        assert!(!store.has("s1"));
    }
}
