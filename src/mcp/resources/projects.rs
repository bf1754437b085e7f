//! Project resource aggregators.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::TaskApi;
use crate::format;
use crate::mcp::resources::ResourceError;

/// `taskdeck://project/{id}`
pub async fn project_view<C: TaskApi + ?Sized>(
    api: &C,
    id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(project_id = id, "reading project resource");
    let project = api
        .get_project(id)
        .await
        .map_err(ResourceError::fetch("project"))?;

    let tasks = match api.get_project_tasks(id).await {
        Ok(tasks) => tasks,
        Err(error) => {
            warn!(project_id = id, %error, "project tasks fetch failed, continuing without tasks");
            Vec::new()
        }
    };

    info!(project_id = id, tasks = tasks.len(), "project resource ready");
    Ok(format::project_details(&project, &tasks, now))
}

/// `taskdeck://project/{id}/tasks`
pub async fn project_tasks_view<C: TaskApi + ?Sized>(
    api: &C,
    id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(project_id = id, "reading project tasks resource");
    let tasks = api
        .get_project_tasks(id)
        .await
        .map_err(ResourceError::fetch("project tasks"))?;
    info!(project_id = id, tasks = tasks.len(), "project tasks ready");
    Ok(format::project_tasks(id, &tasks, now))
}

/// `taskdeck://projects/overview`
pub async fn overview<C: TaskApi + ?Sized>(api: &C) -> Result<String, ResourceError> {
    info!("reading projects overview resource");
    let projects = api
        .list_projects()
        .await
        .map_err(ResourceError::fetch("projects"))?;
    info!(projects = projects.len(), "projects overview ready");
    Ok(format::projects_overview(&projects))
}
