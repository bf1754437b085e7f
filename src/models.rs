//! Domain models mirroring the upstream REST API payloads.
//!
//! Entities are transient snapshots deserialized per request; nothing here
//! is cached or mutated locally. Timestamps stay ISO-8601 strings and are
//! parsed on demand so a malformed upstream value never fails a decode.

use serde::{Deserialize, Serialize};

/// A task as returned by the upstream API.
///
/// `status` is an open-ended label ("Not Started", "In Progress", "Review",
/// "Blocked", "Complete", ...) and is treated as an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub archived: bool,
    pub created_by: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A free-text note attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskNote {
    pub id: String,
    pub task_id: String,
    pub content: String,
    pub created_by: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A project grouping zero or more tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

/// Body for `POST /api/v1/tasks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTaskRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    pub created_by: String,
}

/// Body for `PUT /api/v1/tasks/{id}`. Only the provided fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub updated_by: String,
}

/// Body for `POST /api/v1/tasks/{id}/notes`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNoteRequest {
    pub content: String,
    pub created_by: String,
}

/// Query filters for `GET /api/v1/tasks`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub created_by: Option<String>,
}

impl TaskFilter {
    /// Render the filter as query pairs; empty when no filter is set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(assigned_to) = &self.assigned_to {
            pairs.push(("assigned_to", assigned_to.clone()));
        }
        if let Some(created_by) = &self.created_by {
            pairs.push(("created_by", created_by.clone()));
        }
        pairs
    }
}
