//! The task forest: types, path-based update, lookup, rendering, deep copy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validators::{self, validate_task_description, validate_task_id};

/// Status of a single task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "DONE")]
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

/// One node of a task forest. Recursive; depth is unbounded by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "taskId")]
    pub task_id: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub children: Vec<Task>,
}

/// An ordered sequence of root tasks. Order is significant (render order).
pub type Forest = Vec<Task>;

/// Validate one submitted task and its descendants recursively. A missing
/// `status` already normalizes to `TODO` via `#[serde(default)]` on
/// deserialization; this additionally re-validates ids/descriptions for tasks
/// constructed directly, not just deserialized.
pub fn validate_task_tree(task: &Task) -> Result<(), CoreError> {
    validate_task_id(&task.task_id)?;
    validate_task_description(&task.description)?;
    for child in &task.children {
        validate_task_tree(child)?;
    }
    Ok(())
}

/// Collect every `taskId` across a forest (and descendants), rejecting the
/// first duplicate encountered.
pub fn check_no_duplicate_ids(forest: &[Task]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    check_no_duplicate_ids_inner(forest, &mut seen)
}

fn check_no_duplicate_ids_inner<'a>(
    forest: &'a [Task],
    seen: &mut HashSet<&'a str>,
) -> Result<(), CoreError> {
    for task in forest {
        if !seen.insert(task.task_id.as_str()) {
            return Err(CoreError::DuplicateTaskId(task.task_id.clone()));
        }
        check_no_duplicate_ids_inner(&task.children, seen)?;
    }
    Ok(())
}

/// Replace the children at `path` with `new_children`.
///
/// Empty `segments` replaces the whole forest. Otherwise walks segment by
/// segment matching on `taskId`; if the full path resolves, that node's
/// `children` is replaced (its own id/description/status are preserved). If
/// any segment fails to resolve, the original forest is returned unchanged —
/// a silent no-op.
pub fn update_at_path(forest: &Forest, segments: &[String], new_children: Forest) -> Forest {
    if segments.is_empty() {
        return new_children;
    }
    match update_at_path_inner(forest, segments, &new_children) {
        Some(updated) => updated,
        None => forest.clone(),
    }
}

fn update_at_path_inner(
    siblings: &[Task],
    segments: &[String],
    new_children: &Forest,
) -> Option<Forest> {
    let (head, rest) = segments.split_first()?;
    let index = siblings.iter().position(|t| &t.task_id == head)?;

    let mut updated = siblings.to_vec();
    if rest.is_empty() {
        updated[index].children = new_children.clone();
    } else {
        updated[index].children =
            update_at_path_inner(&updated[index].children, rest, new_children)?;
    }
    Some(updated)
}

/// Find a task anywhere in the forest by id: depth-first, first match wins.
pub fn find_by_id<'a>(forest: &'a [Task], id: &str) -> Option<&'a Task> {
    for task in forest {
        if task.task_id == id {
            return Some(task);
        }
        if let Some(found) = find_by_id(&task.children, id) {
            return Some(found);
        }
    }
    None
}

/// Set the matched node's status to `DONE` in place. Descendants are
/// untouched. Returns `true` if a node was found and marked.
pub fn mark_done(forest: &mut Forest, id: &str) -> bool {
    mark_done_inner(forest, id)
}

fn mark_done_inner(siblings: &mut [Task], id: &str) -> bool {
    for task in siblings.iter_mut() {
        if task.task_id == id {
            task.status = TaskStatus::Done;
            return true;
        }
        if mark_done_inner(&mut task.children, id) {
            return true;
        }
    }
    false
}

/// Produce a structurally independent copy, used for work-info snapshots.
pub fn deep_copy_forest(forest: &Forest) -> Forest {
    forest.clone()
}

/// Render the forest as an ASCII tree. Empty forest renders as the literal
/// `"No tasks"`.
pub fn format_tree(forest: &Forest) -> String {
    if forest.is_empty() {
        return "No tasks".to_string();
    }
    let mut out = String::new();
    format_siblings(forest, "", &mut out);
    // Drop the trailing newline left by the last `writeln`-style push.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn format_siblings(siblings: &[Task], indent: &str, out: &mut String) {
    let last_index = siblings.len() - 1;
    for (i, task) in siblings.iter().enumerate() {
        let is_last = i == last_index;
        let branch = if is_last { "└── " } else { "├── " };
        let symbol = match task.status {
            TaskStatus::Done => "✓",
            TaskStatus::Todo => "○",
        };
        out.push_str(indent);
        out.push_str(branch);
        out.push_str(symbol);
        out.push(' ');
        out.push_str(&task.task_id);
        out.push_str(": ");
        out.push_str(&task.description);
        out.push('\n');

        if !task.children.is_empty() {
            let child_indent = if is_last {
                format!("{indent}    ")
            } else {
                format!("{indent}│   ")
            };
            format_siblings(&task.children, &child_indent, out);
        }
    }
}

/// Parse a path string into segments, delegating to the validator module so
/// tree operations and argument validation agree on segmentation rules.
pub fn parse_path(raw: &str) -> Vec<String> {
    validators::parse_path_segments(raw)
}
