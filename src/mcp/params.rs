//! Tool parameter structs.
//!
//! Required string arguments are validated non-empty in the handlers via
//! [`require_arg`] before any API call is made.

use rmcp::{
    ErrorData as McpError,
    schemars::{self, JsonSchema},
};
use serde::{Deserialize, Serialize};

/// Validate a required string argument, naming the missing field.
pub fn require_arg<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, McpError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(McpError::invalid_params(format!("{field} is required"), None)),
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Task name (required)")]
    pub name: String,
    #[schemars(description = "Task description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Priority label, e.g. 'High', 'Medium', 'Low' (optional)")]
    pub priority: Option<String>,
    #[schemars(description = "User the task is assigned to (optional)")]
    pub assigned_to: Option<String>,
    #[schemars(description = "Due date, ISO-8601 (optional)")]
    pub due_date: Option<String>,
    #[schemars(description = "Project the task belongs to (optional)")]
    pub project_id: Option<String>,
    #[schemars(description = "Tags for categorization (optional)")]
    pub tags: Option<Vec<String>>,
    #[schemars(
        description = "Initial note recorded on the task right after creation (required)"
    )]
    pub initial_note: Option<String>,
    #[schemars(description = "User creating the task (required)")]
    pub created_by: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskDetailsParams {
    #[schemars(description = "Task ID to look up")]
    pub task_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskProgressParams {
    #[schemars(description = "Task ID to update")]
    pub task_id: String,
    #[schemars(
        description = "New status: 'Not Started', 'In Progress', 'Review', 'Blocked', 'Complete' (optional)"
    )]
    pub status: Option<String>,
    #[schemars(description = "New priority label (optional)")]
    pub priority: Option<String>,
    #[schemars(description = "Reassign the task to this user (optional)")]
    pub assigned_to: Option<String>,
    #[schemars(description = "Progress note to record alongside the update (optional)")]
    pub progress_note: Option<String>,
    #[schemars(description = "User making the update (required)")]
    pub updated_by: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    #[schemars(description = "Filter by status label (optional)")]
    pub status: Option<String>,
    #[schemars(description = "Filter by assignee (optional)")]
    pub assigned_to: Option<String>,
    #[schemars(description = "Filter by creator (optional)")]
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_arg_accepts_non_empty() {
        assert_eq!(require_arg(Some("alice"), "created_by").unwrap(), "alice");
    }

    #[test]
    fn require_arg_rejects_missing_and_blank() {
        let err = require_arg(None, "initial_note").unwrap_err();
        assert!(err.message.contains("initial_note is required"));

        let err = require_arg(Some("   "), "name").unwrap_err();
        assert!(err.message.contains("name is required"));
    }
}
