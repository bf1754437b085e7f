//! Dashboard formatters: system-wide, per-user, and per-project rollups.

use chrono::{DateTime, Utc};

use crate::format::stats::{TaskStats, top_n};
use crate::format::tasks::{push_breakdowns, push_summary, task_line};
use crate::format::text::{
    NONE_PLACEHOLDER, PROJECT_DESCRIPTION_LIMIT, RECENT_LIMIT, push_truncated_list, truncate_text,
};
use crate::models::{Project, Task};

/// System-wide rollup over every project and task.
pub fn system_dashboard(tasks: &[Task], projects: &[Project], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str("# System Dashboard\n\n");
    out.push_str(&format!("Total Projects: {}\n", projects.len()));
    push_summary(&mut out, &stats);

    out.push_str("\n## By Status\n");
    for (status, count) in &stats.by_status {
        out.push_str(&format!("- {status}: {count}\n"));
    }

    out.push_str("\n## Top Assignees\n");
    for (assignee, count) in top_n(&stats.by_assignee, 5) {
        out.push_str(&format!("- {assignee}: {count}\n"));
    }

    out.push_str("\n## Recent Tasks\n");
    push_truncated_list(&mut out, tasks, RECENT_LIMIT, "tasks", task_line);
    out
}

/// Rollup over the tasks assigned to one user.
pub fn user_dashboard(user_id: &str, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str(&format!("# Dashboard for {user_id}\n\n"));
    push_summary(&mut out, &stats);
    push_breakdowns(&mut out, &stats);

    out.push_str("\n## Recent Tasks\n");
    push_truncated_list(&mut out, tasks, RECENT_LIMIT, "tasks", task_line);
    out
}

/// Rollup for one project and its tasks.
pub fn project_dashboard(project: &Project, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str(&format!("# Project Dashboard: {}\n\n", project.name));
    out.push_str(&format!("ID: {}\n", project.id));
    match project.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => out.push_str(&format!(
            "Description: {}\n",
            truncate_text(description, PROJECT_DESCRIPTION_LIMIT)
        )),
        None => out.push_str(&format!("Description: {NONE_PLACEHOLDER}\n")),
    }
    out.push('\n');
    push_summary(&mut out, &stats);
    push_breakdowns(&mut out, &stats);

    out.push_str("\n## Recent Tasks\n");
    push_truncated_list(&mut out, tasks, RECENT_LIMIT, "tasks", task_line);
    out
}
