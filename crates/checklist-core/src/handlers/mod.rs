//! The six tool handlers.
//!
//! Each handler validates its arguments, obtains its namespace's stores from
//! the registry (creating the namespace on demand), performs the operation,
//! and returns an ordered list of text parts. A handler never panics on bad
//! input — validation failures become a `CoreError`, which [`respond`]
//! flattens into the single `"Error: …"` text part the transport contract
//! expects.

mod get_all_tasks;
mod get_recent_works_info;
mod get_work_by_id;
mod mark_task_as_done;
mod save_current_work_info;
mod update_tasks;

pub use get_all_tasks::get_all_tasks;
pub use get_recent_works_info::get_recent_works_info;
pub use get_work_by_id::get_work_by_id;
pub use mark_task_as_done::mark_task_as_done;
pub use save_current_work_info::save_current_work_info;
pub use update_tasks::update_tasks;

use crate::errors::CoreError;

/// Flatten a handler's `Result` into the text-part response the transport
/// contract expects: the success parts verbatim, or a single `"Error: …"`
/// part on failure.
pub fn respond(result: Result<Vec<String>, CoreError>) -> Vec<String> {
    match result {
        Ok(parts) => parts,
        Err(err) => vec![err.user_message()],
    }
}
