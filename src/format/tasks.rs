//! Task report formatters.

use chrono::{DateTime, Utc};

use crate::format::stats::{TaskStats, is_overdue, top_n};
use crate::format::text::{
    NO_DUE_DATE, NONE_PLACEHOLDER, TASK_DESCRIPTION_LIMIT, TASK_LIST_LIMIT, UNASSIGNED, opt_or,
    push_truncated_list, truncate_text,
};
use crate::models::{Project, Task, TaskNote};

/// One-line task rendering used in every list section.
pub(crate) fn task_line(task: &Task) -> String {
    format!(
        "- [{}] {} ({})",
        task.status,
        task.name,
        opt_or(task.assigned_to.as_deref(), UNASSIGNED)
    )
}

/// Append "## By Status" / "## By Priority" breakdowns from shared stats.
pub(crate) fn push_breakdowns(out: &mut String, stats: &TaskStats) {
    out.push_str("\n## By Status\n");
    for (status, count) in &stats.by_status {
        out.push_str(&format!("- {status}: {count}\n"));
    }
    out.push_str("\n## By Priority\n");
    for (priority, count) in &stats.by_priority {
        out.push_str(&format!("- {priority}: {count}\n"));
    }
}

/// Append the summary counters common to every aggregate report.
pub(crate) fn push_summary(out: &mut String, stats: &TaskStats) {
    out.push_str(&format!("Total Tasks: {}\n", stats.total));
    out.push_str(&format!("Completion: {:.1}%\n", stats.completion_rate));
    out.push_str(&format!("Overdue: {}\n", stats.overdue));
}

/// Full detail view for one task with its notes and (optionally) its
/// project. A task without a project renders no "Project:" line at all;
/// an empty note list renders no "Notes" section.
pub fn task_details(
    task: &Task,
    notes: &[TaskNote],
    project: Option<&Project>,
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Task: {}\n\n", task.name));
    out.push_str(&format!("ID: {}\n", task.id));
    out.push_str(&format!("Status: {}\n", task.status));
    out.push_str(&format!(
        "Priority: {}\n",
        opt_or(task.priority.as_deref(), NONE_PLACEHOLDER)
    ));
    out.push_str(&format!(
        "Assigned To: {}\n",
        opt_or(task.assigned_to.as_deref(), UNASSIGNED)
    ));
    let due = opt_or(task.due_date.as_deref(), NO_DUE_DATE);
    if is_overdue(task, now) {
        out.push_str(&format!("Due Date: {due} (OVERDUE)\n"));
    } else {
        out.push_str(&format!("Due Date: {due}\n"));
    }
    if task.tags.is_empty() {
        out.push_str(&format!("Tags: {NONE_PLACEHOLDER}\n"));
    } else {
        out.push_str(&format!("Tags: {}\n", task.tags.join(", ")));
    }
    out.push_str(&format!(
        "Created By: {} at {}\n",
        task.created_by, task.created_at
    ));
    out.push_str(&format!(
        "Last Updated: {}\n",
        opt_or(task.updated_at.as_deref(), NONE_PLACEHOLDER)
    ));
    if let Some(project) = project {
        out.push_str(&format!("Project: {} ({})\n", project.name, project.id));
    }

    out.push_str("\n## Description\n");
    match task.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => {
            out.push_str(&truncate_text(description, TASK_DESCRIPTION_LIMIT));
            out.push('\n');
        }
        None => out.push_str(&format!("{NONE_PLACEHOLDER}\n")),
    }

    if !notes.is_empty() {
        out.push_str(&format!("\n## Notes ({})\n", notes.len()));
        for note in notes {
            out.push_str(&format!(
                "- [{}] {}: {}\n",
                note.created_at, note.created_by, note.content
            ));
        }
    }

    out
}

/// Aggregate view over all tasks in the system.
pub fn tasks_overview(tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str("# Tasks Overview\n\n");
    push_summary(&mut out, &stats);
    push_breakdowns(&mut out, &stats);

    out.push_str("\n## Top Assignees\n");
    for (assignee, count) in top_n(&stats.by_assignee, 5) {
        out.push_str(&format!("- {assignee}: {count}\n"));
    }

    out.push_str("\n## Recent Tasks\n");
    push_truncated_list(&mut out, tasks, TASK_LIST_LIMIT, "tasks", task_line);
    out
}

/// Flat listing for task search results.
pub fn search_results(tasks: &[Task]) -> String {
    let mut out = String::new();
    out.push_str("# Task Search Results\n\n");
    out.push_str(&format!("Matches: {}\n", tasks.len()));
    if !tasks.is_empty() {
        out.push_str("\n## Tasks\n");
        push_truncated_list(&mut out, tasks, TASK_LIST_LIMIT, "tasks", task_line);
    }
    out
}

/// Tasks assigned to one user.
pub fn user_tasks(user_id: &str, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str(&format!("# Tasks for {user_id}\n\n"));
    push_summary(&mut out, &stats);
    push_breakdowns(&mut out, &stats);

    out.push_str("\n## Tasks\n");
    push_truncated_list(&mut out, tasks, TASK_LIST_LIMIT, "tasks", task_line);
    out
}
