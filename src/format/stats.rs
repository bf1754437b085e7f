//! Shared task-statistics computation.
//!
//! One `TaskStats::compute` feeds the task overview, project views, and
//! all dashboard variants so percentages never drift between reports.

use chrono::{DateTime, Utc};

use crate::format::text::{NONE_PLACEHOLDER, UNASSIGNED};
use crate::models::Task;

/// The status label that counts as finished work.
pub const COMPLETE_STATUS: &str = "Complete";

/// Fixed display order for per-status sections. Statuses outside this
/// list render afterwards in first-seen order; they are never dropped.
pub const STATUS_DISPLAY_ORDER: [&str; 5] =
    ["In Progress", "Review", "Blocked", "Not Started", "Complete"];

/// Aggregated statistics over a task collection.
///
/// Groupings are ordered associations (first-seen insertion order) so the
/// rendered report order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// Percentage, one-decimal semantics; 0.0 for an empty collection.
    pub completion_rate: f64,
    pub overdue: usize,
    pub by_status: Vec<(String, usize)>,
    pub by_priority: Vec<(String, usize)>,
    pub by_assignee: Vec<(String, usize)>,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.status == COMPLETE_STATUS).count();
        let overdue = tasks.iter().filter(|t| is_overdue(t, now)).count();

        let by_status = order_statuses(count_by(tasks.iter().map(|t| t.status.clone())));
        let by_priority = count_by(
            tasks
                .iter()
                .map(|t| t.priority.clone().unwrap_or_else(|| NONE_PLACEHOLDER.to_string())),
        );
        let by_assignee = count_by(
            tasks
                .iter()
                .map(|t| t.assigned_to.clone().unwrap_or_else(|| UNASSIGNED.to_string())),
        );

        Self {
            total,
            completed,
            completion_rate: completion_rate(completed, total),
            overdue,
            by_status,
            by_priority,
            by_assignee,
        }
    }
}

/// Completion percentage; guarded against an empty collection.
pub fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// A task is overdue when it has a due date that parses, the due instant
/// is strictly before `now`, and the task is not complete. Unparseable
/// timestamps are silently treated as not overdue.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    if task.status == COMPLETE_STATUS {
        return false;
    }
    let Some(due) = task.due_date.as_deref() else {
        return false;
    };
    match DateTime::parse_from_rfc3339(due) {
        Ok(due) => due.with_timezone(&Utc) < now,
        Err(_) => false,
    }
}

/// Take the `n` largest buckets, stable descending by count; ties keep
/// first-seen order.
pub fn top_n(counts: &[(String, usize)], n: usize) -> Vec<(String, usize)> {
    let mut ranked = counts.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Count occurrences preserving first-seen key order.
fn count_by(keys: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

/// Reorder status buckets: the fixed display order first, then any other
/// labels in the order they were first seen.
fn order_statuses(counts: Vec<(String, usize)>) -> Vec<(String, usize)> {
    let mut ordered = Vec::with_capacity(counts.len());
    for status in STATUS_DISPLAY_ORDER {
        if let Some(entry) = counts.iter().find(|(k, _)| k == status) {
            ordered.push(entry.clone());
        }
    }
    for entry in counts {
        if !STATUS_DISPLAY_ORDER.contains(&entry.0.as_str()) {
            ordered.push(entry);
        }
    }
    ordered
}
