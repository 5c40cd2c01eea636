//! Pure validation functions.
//!
//! Each validator checks exactly one field and returns either a normalized
//! value or a [`CoreError`]. None of them panic or log — the handler layer
//! decides what to do with a rejection.

use crate::errors::CoreError;

const SESSION_ID_MAX_LEN: usize = 100;
const TASK_ID_MAX_LEN: usize = 20;
const PATH_MAX_LEN: usize = 500;
const WORK_DESCRIPTION_MAX_LEN: usize = 200;
const WORK_SUMMARY_MAX_LEN: usize = 5000;
const TASK_DESCRIPTION_MAX_LEN: usize = 1000;

fn is_session_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_task_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_@#$%&+=!.".contains(c)
}

/// Validate a `sessionId`: 1-100 chars, `[A-Za-z0-9_-]`.
pub fn validate_session_id(raw: &str) -> Result<String, CoreError> {
    if raw.is_empty() || raw.len() > SESSION_ID_MAX_LEN {
        return Err(CoreError::InvalidSessionId(format!(
            "sessionId must be 1-{SESSION_ID_MAX_LEN} chars, got {}",
            raw.len()
        )));
    }
    if !raw.chars().all(is_session_id_char) {
        return Err(CoreError::InvalidSessionId(format!(
            "sessionId '{raw}' contains characters outside [A-Za-z0-9_-]"
        )));
    }
    Ok(raw.to_string())
}

/// Validate a `taskId`: 1-20 chars, `[A-Za-z0-9\-_@#$%&+=!.]`.
pub fn validate_task_id(raw: &str) -> Result<String, CoreError> {
    if raw.is_empty() || raw.len() > TASK_ID_MAX_LEN {
        return Err(CoreError::InvalidTaskId(format!(
            "taskId must be 1-{TASK_ID_MAX_LEN} chars, got {}",
            raw.len()
        )));
    }
    if !raw.chars().all(is_task_id_char) {
        return Err(CoreError::InvalidTaskId(format!(
            "taskId '{raw}' contains characters outside [A-Za-z0-9-_@#$%&+=!.]"
        )));
    }
    Ok(raw.to_string())
}

/// Validate and normalize a path: absolute (leading `/` implied), ≤500 chars,
/// no consecutive `/`, each segment a valid taskId.
///
/// Returns the normalized path (leading `/` added, trailing `/` tolerated) and
/// the parsed segment list.
pub fn validate_path(raw: &str) -> Result<(String, Vec<String>), CoreError> {
    if raw.len() > PATH_MAX_LEN {
        return Err(CoreError::InvalidPath(format!(
            "path must be at most {PATH_MAX_LEN} chars, got {}",
            raw.len()
        )));
    }
    if raw.contains("//") {
        return Err(CoreError::InvalidPath(format!(
            "path '{raw}' contains consecutive slashes"
        )));
    }

    let segments = parse_path_segments(raw);
    for segment in &segments {
        validate_task_id(segment)
            .map_err(|_| CoreError::InvalidPath(format!("path segment '{segment}' is not a valid taskId")))?;
    }

    let normalized = if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    };

    Ok((normalized, segments))
}

/// Split a path into non-empty segments, stripping leading/trailing slashes.
/// Shared by [`validate_path`] and the tree operations that walk a path.
pub fn parse_path_segments(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a `workId`: exactly 8 decimal digits, first digit nonzero.
pub fn validate_work_id(raw: &str) -> Result<String, CoreError> {
    let valid = raw.len() == 8
        && raw.as_bytes()[0] != b'0'
        && raw.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        return Err(CoreError::InvalidWorkId(format!(
            "workId '{raw}' must match ^[1-9][0-9]{{7}}$"
        )));
    }
    Ok(raw.to_string())
}

/// Validate `work_description`: non-empty (after trim), ≤200 chars.
pub fn validate_work_description(raw: &str) -> Result<String, CoreError> {
    validate_text(raw, WORK_DESCRIPTION_MAX_LEN, "work_description")
}

/// Validate `work_summarize`: non-empty (after trim), ≤5000 chars.
pub fn validate_work_summarize(raw: &str) -> Result<String, CoreError> {
    validate_text(raw, WORK_SUMMARY_MAX_LEN, "work_summarize")
}

/// Validate a task `description`: non-empty (after trim), ≤1000 chars.
pub fn validate_task_description(raw: &str) -> Result<String, CoreError> {
    validate_text(raw, TASK_DESCRIPTION_MAX_LEN, "description")
}

fn validate_text(raw: &str, max_len: usize, field: &str) -> Result<String, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::InvalidText(format!(
            "{field} must not be empty or whitespace-only"
        )));
    }
    if raw.len() > max_len {
        return Err(CoreError::InvalidText(format!(
            "{field} must be at most {max_len} chars, got {}",
            raw.len()
        )));
    }
    Ok(raw.to_string())
}
