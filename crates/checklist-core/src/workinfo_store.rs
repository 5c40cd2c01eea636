//! The work-info-LRU specialization: workId -> [`WorkInfo`].

use tracing::debug;

use crate::lru::LruStore;
use crate::work_info::{WorkInfo, WorkSummary};

/// Bounded LRU map of workId -> [`WorkInfo`], fixed capacity
/// [`crate::config::WORK_INFO_CAPACITY`].
pub struct WorkInfoStore {
    inner: LruStore<String, WorkInfo>,
}

impl WorkInfoStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruStore::new(capacity),
        }
    }

    /// Promoting fetch of a work-info record, if present.
    pub fn get(&mut self, work_id: &str) -> Option<&WorkInfo> {
        self.inner.get(&work_id.to_string())
    }

    /// Insert or replace a work-info record. Replacing an existing workId
    /// preserves its position as most-recent.
    pub fn set(&mut self, info: WorkInfo) {
        let work_id = info.work_id.clone();
        let is_new = !self.inner.has(&work_id);
        self.inner.set(work_id.clone(), info);
        if is_new {
            debug!(event = "core.work_info.created", work_id);
        } else {
            debug!(event = "core.work_info.overwritten", work_id);
        }
    }

    /// Non-promoting summary listing, most-recent-first.
    pub fn recent_list(&self) -> Vec<WorkSummary> {
        self.inner
            .values_most_recent_first()
            .into_iter()
            .map(WorkSummary::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}
