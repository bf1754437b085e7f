//! Task resource aggregators.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::TaskApi;
use crate::format;
use crate::mcp::resources::ResourceError;
use crate::models::{Project, Task, TaskFilter, TaskNote};

/// Fetch a task with its notes and project.
///
/// The task itself is the primary fetch; notes and project are secondary
/// and degrade to empty/None on failure. Shared by the task resource and
/// the `get_task_details` tool so both report from the same data.
pub async fn fetch_task_context<C: TaskApi + ?Sized>(
    api: &C,
    id: &str,
) -> Result<(Task, Vec<TaskNote>, Option<Project>), ResourceError> {
    let task = api.get_task(id).await.map_err(ResourceError::fetch("task"))?;

    let notes = match api.get_task_notes(id).await {
        Ok(notes) => notes,
        Err(error) => {
            warn!(task_id = id, %error, "notes fetch failed, continuing without notes");
            Vec::new()
        }
    };

    let project = match task.project_id.as_deref() {
        Some(project_id) => match api.get_project(project_id).await {
            Ok(project) => Some(project),
            Err(error) => {
                warn!(task_id = id, project_id, %error, "project fetch failed, continuing without project");
                None
            }
        },
        None => None,
    };

    Ok((task, notes, project))
}

/// `taskdeck://task/{id}`
pub async fn task_view<C: TaskApi + ?Sized>(
    api: &C,
    id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(task_id = id, "reading task resource");
    let (task, notes, project) = fetch_task_context(api, id).await?;
    info!(
        task_id = id,
        notes = notes.len(),
        has_project = project.is_some(),
        "task resource ready"
    );
    Ok(format::task_details(&task, &notes, project.as_ref(), now))
}

/// `taskdeck://tasks/overview`
pub async fn overview<C: TaskApi + ?Sized>(
    api: &C,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!("reading tasks overview resource");
    let tasks = api
        .list_tasks(&TaskFilter::default())
        .await
        .map_err(ResourceError::fetch("tasks"))?;
    info!(tasks = tasks.len(), "tasks overview ready");
    Ok(format::tasks_overview(&tasks, now))
}

/// `taskdeck://tasks/user/{id}`
pub async fn user_view<C: TaskApi + ?Sized>(
    api: &C,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(user_id, "reading user tasks resource");
    let filter = TaskFilter {
        assigned_to: Some(user_id.to_string()),
        ..TaskFilter::default()
    };
    let tasks = api
        .list_tasks(&filter)
        .await
        .map_err(ResourceError::fetch("tasks"))?;
    info!(user_id, tasks = tasks.len(), "user tasks ready");
    Ok(format::user_tasks(user_id, &tasks, now))
}
