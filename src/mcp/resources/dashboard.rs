//! Dashboard resource aggregators.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::TaskApi;
use crate::format;
use crate::mcp::resources::ResourceError;
use crate::models::TaskFilter;

/// `taskdeck://dashboard/system`
pub async fn system<C: TaskApi + ?Sized>(
    api: &C,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!("reading system dashboard");
    let tasks = api
        .list_tasks(&TaskFilter::default())
        .await
        .map_err(ResourceError::fetch("tasks"))?;

    let projects = match api.list_projects().await {
        Ok(projects) => projects,
        Err(error) => {
            warn!(%error, "projects fetch failed, dashboard omits project counts");
            Vec::new()
        }
    };

    info!(
        tasks = tasks.len(),
        projects = projects.len(),
        "system dashboard ready"
    );
    Ok(format::system_dashboard(&tasks, &projects, now))
}

/// `taskdeck://dashboard/user/{id}`
pub async fn user<C: TaskApi + ?Sized>(
    api: &C,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(user_id, "reading user dashboard");
    let filter = TaskFilter {
        assigned_to: Some(user_id.to_string()),
        ..TaskFilter::default()
    };
    let tasks = api
        .list_tasks(&filter)
        .await
        .map_err(ResourceError::fetch("tasks"))?;
    info!(user_id, tasks = tasks.len(), "user dashboard ready");
    Ok(format::user_dashboard(user_id, &tasks, now))
}

/// `taskdeck://dashboard/project/{id}`
pub async fn project<C: TaskApi + ?Sized>(
    api: &C,
    id: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    info!(project_id = id, "reading project dashboard");
    let project = api
        .get_project(id)
        .await
        .map_err(ResourceError::fetch("project"))?;

    let tasks = match api.get_project_tasks(id).await {
        Ok(tasks) => tasks,
        Err(error) => {
            warn!(project_id = id, %error, "project tasks fetch failed, dashboard shows zero tasks");
            Vec::new()
        }
    };

    info!(project_id = id, tasks = tasks.len(), "project dashboard ready");
    Ok(format::project_dashboard(&project, &tasks, now))
}
