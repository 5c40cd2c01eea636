//! Crate-wide error taxonomy.
//!
//! Every fallible operation in this crate returns [`CoreError`]. Handlers never
//! let an error cross the store boundary as a panic or an opaque `String` —
//! store operations report not-found as a sentinel `Option`/`bool`, and only the
//! handler layer maps a missing entity to one of these variants.

/// All error kinds produced by the checklist engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid sessionId: {0}")]
    InvalidSessionId(String),

    #[error("invalid taskId: {0}")]
    InvalidTaskId(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("invalid workId: {0}")]
    InvalidWorkId(String),

    #[error("invalid text: {0}")]
    InvalidText(String),

    #[error("duplicate taskId in submitted tasks: {0}")]
    DuplicateTaskId(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("work info not found: {0}")]
    WorkNotFound(String),

    #[error("could not generate a unique workId after exhausting retry budget")]
    IdExhaustion,
}

impl CoreError {
    /// Stable `snake_case` token for this error kind, for a transport layer to
    /// map onto a JSON-RPC error code without re-deriving the taxonomy.
    pub fn error_code(&self) -> &'static str {
        match self {
            CoreError::InvalidSessionId(_) => "invalid_session_id",
            CoreError::InvalidTaskId(_) => "invalid_task_id",
            CoreError::InvalidPath(_) => "invalid_path",
            CoreError::InvalidWorkId(_) => "invalid_work_id",
            CoreError::InvalidText(_) => "invalid_text",
            CoreError::DuplicateTaskId(_) => "duplicate_task_id",
            CoreError::SessionNotFound(_) => "session_not_found",
            CoreError::TaskNotFound(_) => "task_not_found",
            CoreError::WorkNotFound(_) => "work_not_found",
            CoreError::IdExhaustion => "id_exhaustion",
        }
    }

    /// Render the user-visible `"Error: …"` message a handler returns on
    /// failure.
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}
