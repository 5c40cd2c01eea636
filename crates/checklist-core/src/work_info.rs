//! Work-info records: immutable snapshots created by `save_current_work_info`.

use serde::{Deserialize, Serialize};

use crate::tree::Forest;

/// One saved work-context snapshot, keyed by `work_id` in the work-info store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkInfo {
    #[serde(rename = "workId")]
    pub work_id: String,
    pub work_timestamp: String,
    pub work_description: String,
    pub work_summarize: String,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_tasks: Option<Forest>,
}

/// The lightweight summary the recent-works listing returns: never the
/// summary text or the task snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSummary {
    #[serde(rename = "workId")]
    pub work_id: String,
    pub work_timestamp: String,
    pub work_description: String,
}

impl From<&WorkInfo> for WorkSummary {
    fn from(info: &WorkInfo) -> Self {
        WorkSummary {
            work_id: info.work_id.clone(),
            work_timestamp: info.work_timestamp.clone(),
            work_description: info.work_description.clone(),
        }
    }
}
