use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::error::{ApiError, ApiResult};
use crate::client::http::ApiClient;
use crate::models::{
    CreateNoteRequest, CreateTaskRequest, Project, Task, TaskFilter, TaskNote, UpdateTaskRequest,
};

/// Typed operations against the task API.
///
/// MCP handlers are generic over this trait so tests can run against a
/// stub backend that never touches the network.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self, filter: &TaskFilter) -> ApiResult<Vec<Task>>;
    async fn get_task(&self, id: &str) -> ApiResult<Task>;
    async fn get_task_notes(&self, id: &str) -> ApiResult<Vec<TaskNote>>;
    async fn create_task(&self, req: &CreateTaskRequest) -> ApiResult<Task>;
    async fn create_task_note(&self, task_id: &str, req: &CreateNoteRequest)
    -> ApiResult<TaskNote>;
    async fn update_task(&self, id: &str, req: &UpdateTaskRequest) -> ApiResult<Task>;
    async fn list_projects(&self) -> ApiResult<Vec<Project>>;
    async fn get_project(&self, id: &str) -> ApiResult<Project>;
    async fn get_project_tasks(&self, id: &str) -> ApiResult<Vec<Task>>;
    async fn health(&self) -> ApiResult<()>;
}

fn decode<T: DeserializeOwned>(bytes: &[u8], entity: &'static str) -> ApiResult<T> {
    serde_json::from_slice(bytes).map_err(|source| ApiError::Decode { entity, source })
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn list_tasks(&self, filter: &TaskFilter) -> ApiResult<Vec<Task>> {
        let query = filter.query_pairs();
        let bytes = if query.is_empty() {
            self.get("/api/v1/tasks").await?
        } else {
            self.get_with_query("/api/v1/tasks", &query).await?
        };
        decode(&bytes, "tasks")
    }

    async fn get_task(&self, id: &str) -> ApiResult<Task> {
        let bytes = self.get(&format!("/api/v1/tasks/{id}")).await?;
        decode(&bytes, "task")
    }

    async fn get_task_notes(&self, id: &str) -> ApiResult<Vec<TaskNote>> {
        let bytes = self.get(&format!("/api/v1/tasks/{id}/notes")).await?;
        decode(&bytes, "task notes")
    }

    async fn create_task(&self, req: &CreateTaskRequest) -> ApiResult<Task> {
        let bytes = self.post("/api/v1/tasks", req).await?;
        decode(&bytes, "task")
    }

    async fn create_task_note(
        &self,
        task_id: &str,
        req: &CreateNoteRequest,
    ) -> ApiResult<TaskNote> {
        let bytes = self
            .post(&format!("/api/v1/tasks/{task_id}/notes"), req)
            .await?;
        decode(&bytes, "task note")
    }

    async fn update_task(&self, id: &str, req: &UpdateTaskRequest) -> ApiResult<Task> {
        let bytes = self.put(&format!("/api/v1/tasks/{id}"), req).await?;
        decode(&bytes, "task")
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let bytes = self.get("/api/v1/projects").await?;
        decode(&bytes, "projects")
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let bytes = self.get(&format!("/api/v1/projects/{id}")).await?;
        decode(&bytes, "project")
    }

    async fn get_project_tasks(&self, id: &str) -> ApiResult<Vec<Task>> {
        let bytes = self.get(&format!("/api/v1/projects/{id}/tasks")).await?;
        decode(&bytes, "project tasks")
    }

    async fn health(&self) -> ApiResult<()> {
        self.get("/health").await?;
        Ok(())
    }
}
