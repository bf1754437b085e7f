//! Project report formatters.

use chrono::{DateTime, Utc};

use crate::format::stats::TaskStats;
use crate::format::tasks::{push_summary, task_line};
use crate::format::text::{
    NONE_PLACEHOLDER, PROJECT_DESCRIPTION_LIMIT, PROJECT_TASK_LIMIT, TASK_LIST_LIMIT,
    push_truncated_list, truncate_text,
};
use crate::models::{Project, Task};

fn description_line(description: Option<&str>) -> String {
    match description.filter(|d| !d.is_empty()) {
        Some(description) => format!(
            "Description: {}\n",
            truncate_text(description, PROJECT_DESCRIPTION_LIMIT)
        ),
        None => format!("Description: {NONE_PLACEHOLDER}\n"),
    }
}

/// Detail view for one project, with statistics over its tasks.
/// `tasks` may be empty when the secondary fetch failed; the report keeps
/// its shape and shows zero counts.
pub fn project_details(project: &Project, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str(&format!("# Project: {}\n\n", project.name));
    out.push_str(&format!("ID: {}\n", project.id));
    out.push_str(&format!(
        "Created By: {} at {}\n",
        project.created_by, project.created_at
    ));
    out.push_str(&description_line(project.description.as_deref()));
    out.push('\n');
    push_summary(&mut out, &stats);

    out.push_str("\n## By Status\n");
    for (status, count) in &stats.by_status {
        out.push_str(&format!("- {status}: {count}\n"));
    }

    out.push_str("\n## Tasks\n");
    push_truncated_list(&mut out, tasks, PROJECT_TASK_LIMIT, "tasks", task_line);
    out
}

/// Flat task list for one project.
pub fn project_tasks(project_id: &str, tasks: &[Task], now: DateTime<Utc>) -> String {
    let stats = TaskStats::compute(tasks, now);
    let mut out = String::new();
    out.push_str(&format!("# Tasks for Project {project_id}\n\n"));
    push_summary(&mut out, &stats);

    out.push_str("\n## Tasks\n");
    push_truncated_list(&mut out, tasks, PROJECT_TASK_LIMIT, "tasks", task_line);
    out
}

/// Aggregate view over all projects.
pub fn projects_overview(projects: &[Project]) -> String {
    let mut out = String::new();
    out.push_str("# Projects Overview\n\n");
    out.push_str(&format!("Total Projects: {}\n", projects.len()));

    out.push_str("\n## Projects\n");
    push_truncated_list(&mut out, projects, TASK_LIST_LIMIT, "projects", |p| {
        let description = match p.description.as_deref().filter(|d| !d.is_empty()) {
            Some(d) => truncate_text(d, PROJECT_DESCRIPTION_LIMIT),
            None => NONE_PLACEHOLDER.to_string(),
        };
        format!("- {} ({}): {}", p.name, p.id, description)
    });
    out
}
