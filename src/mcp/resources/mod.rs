//! Resource aggregators.
//!
//! Each logical resource issues one primary fetch (which must succeed) and
//! zero or more secondary fetches whose failure is logged and tolerated,
//! then delegates rendering to the pure formatters.

mod dashboard;
mod projects;
mod tasks;
mod uri;


pub use tasks::fetch_task_context;
pub use uri::{ResourceUri, SCHEME};

use chrono::{DateTime, Utc};
use miette::Diagnostic;
use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::client::{ApiError, TaskApi};

#[derive(Error, Diagnostic, Debug)]
pub enum ResourceError {
    #[error("invalid URI format: {uri}")]
    #[diagnostic(code(taskdeck::resources::invalid_uri))]
    InvalidUri { uri: String },

    #[error("{entity} ID is required")]
    #[diagnostic(code(taskdeck::resources::id_required))]
    IdRequired { entity: &'static str },

    #[error("failed to get {entity}: {source}")]
    #[diagnostic(code(taskdeck::resources::fetch))]
    Fetch {
        entity: &'static str,
        #[source]
        source: ApiError,
    },
}

impl ResourceError {
    pub(crate) fn fetch(entity: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| ResourceError::Fetch { entity, source }
    }

    /// Map to a protocol-level error for the MCP client.
    pub fn into_mcp(self) -> McpError {
        match &self {
            ResourceError::InvalidUri { .. } | ResourceError::IdRequired { .. } => {
                McpError::invalid_params(self.to_string(), None)
            }
            ResourceError::Fetch { source, .. } if source.is_not_found() => {
                McpError::resource_not_found(self.to_string(), None)
            }
            ResourceError::Fetch { .. } => McpError::internal_error(self.to_string(), None),
        }
    }
}

/// Read any resource URI: parse, aggregate, format.
pub async fn read<C: TaskApi + ?Sized>(
    api: &C,
    uri: &str,
    now: DateTime<Utc>,
) -> Result<String, ResourceError> {
    match ResourceUri::parse(uri)? {
        ResourceUri::Task(id) => tasks::task_view(api, &id, now).await,
        ResourceUri::TasksOverview => tasks::overview(api, now).await,
        ResourceUri::UserTasks(user_id) => tasks::user_view(api, &user_id, now).await,
        ResourceUri::Project(id) => projects::project_view(api, &id, now).await,
        ResourceUri::ProjectTasks(id) => projects::project_tasks_view(api, &id, now).await,
        ResourceUri::ProjectsOverview => projects::overview(api).await,
        ResourceUri::SystemDashboard => dashboard::system(api, now).await,
        ResourceUri::UserDashboard(user_id) => dashboard::user(api, &user_id, now).await,
        ResourceUri::ProjectDashboard(id) => dashboard::project(api, &id, now).await,
    }
}
