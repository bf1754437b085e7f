//! Resource URI parsing.
//!
//! All nine resource patterns are matched in one place so every handler
//! shares a single "invalid URI format" error instead of ad-hoc segment
//! checks. An empty identifier segment is reported as a dedicated
//! "<entity> ID is required" error before any network call.

use crate::mcp::resources::ResourceError;

/// URI scheme this server exposes.
pub const SCHEME: &str = "taskdeck";

/// A parsed resource identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Task(String),
    TasksOverview,
    UserTasks(String),
    Project(String),
    ProjectTasks(String),
    ProjectsOverview,
    SystemDashboard,
    UserDashboard(String),
    ProjectDashboard(String),
}

impl ResourceUri {
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let invalid = || ResourceError::InvalidUri {
            uri: uri.to_string(),
        };
        let path = uri
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix("://"))
            .ok_or_else(invalid)?;

        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            ["task", id] => Ok(ResourceUri::Task(require_id(id, "task")?)),
            ["tasks", "overview"] => Ok(ResourceUri::TasksOverview),
            ["tasks", "user", id] => Ok(ResourceUri::UserTasks(require_id(id, "user")?)),
            ["project", id] => Ok(ResourceUri::Project(require_id(id, "project")?)),
            ["project", id, "tasks"] => Ok(ResourceUri::ProjectTasks(require_id(id, "project")?)),
            ["projects", "overview"] => Ok(ResourceUri::ProjectsOverview),
            ["dashboard", "system"] => Ok(ResourceUri::SystemDashboard),
            ["dashboard", "user", id] => Ok(ResourceUri::UserDashboard(require_id(id, "user")?)),
            ["dashboard", "project", id] => {
                Ok(ResourceUri::ProjectDashboard(require_id(id, "project")?))
            }
            _ => Err(invalid()),
        }
    }
}

fn require_id(id: &str, entity: &'static str) -> Result<String, ResourceError> {
    if id.is_empty() {
        return Err(ResourceError::IdRequired { entity });
    }
    Ok(id.to_string())
}
