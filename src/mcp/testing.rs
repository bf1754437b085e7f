//! In-memory [`TaskApi`] stub for handler tests.
//!
//! Records every call so tests can assert which backend operations ran
//! (and, for validation failures, that none did). Individual operations
//! can be toggled to fail.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{ApiError, ApiResult, TaskApi};
use crate::models::{
    CreateNoteRequest, CreateTaskRequest, Project, Task, TaskFilter, TaskNote, UpdateTaskRequest,
};

pub(crate) struct StubApi {
    tasks: Mutex<Vec<Task>>,
    notes: Mutex<Vec<TaskNote>>,
    projects: Mutex<Vec<Project>>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<&'static str>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
            notes: Mutex::new(Vec::new()),
            projects: Mutex::new(Vec::new()),
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_task(self, task: Task) -> Self {
        self.tasks.lock().unwrap().push(task);
        self
    }

    pub fn with_note(self, note: TaskNote) -> Self {
        self.notes.lock().unwrap().push(note);
        self
    }

    pub fn with_project(self, project: Project) -> Self {
        self.projects.lock().unwrap().push(project);
        self
    }

    /// Make the named operation return a 503 instead of data.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, operation: &'static str) -> ApiResult<()> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.contains(operation) {
            return Err(ApiError::Api {
                status: 503,
                reason: "Service Unavailable",
                body: "stub failure".to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(body: &str) -> ApiError {
    ApiError::Api {
        status: 404,
        reason: "Not Found",
        body: body.to_string(),
    }
}

#[async_trait]
impl TaskApi for StubApi {
    async fn list_tasks(&self, filter: &TaskFilter) -> ApiResult<Vec<Task>> {
        self.record("list_tasks")?;
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| {
                filter.status.as_deref().is_none_or(|s| t.status == s)
                    && filter
                        .assigned_to
                        .as_deref()
                        .is_none_or(|a| t.assigned_to.as_deref() == Some(a))
                    && filter.created_by.as_deref().is_none_or(|c| t.created_by == c)
            })
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: &str) -> ApiResult<Task> {
        self.record("get_task")?;
        let tasks = self.tasks.lock().unwrap();
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found("task not found"))
    }

    async fn get_task_notes(&self, id: &str) -> ApiResult<Vec<TaskNote>> {
        self.record("get_task_notes")?;
        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().filter(|n| n.task_id == id).cloned().collect())
    }

    async fn create_task(&self, req: &CreateTaskRequest) -> ApiResult<Task> {
        self.record("create_task")?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = Task {
            id: format!("t-{}", tasks.len() + 1),
            name: req.name.clone(),
            description: req.description.clone(),
            status: "Not Started".to_string(),
            priority: req.priority.clone(),
            assigned_to: req.assigned_to.clone(),
            project_id: req.project_id.clone(),
            due_date: req.due_date.clone(),
            start_date: None,
            completed_at: None,
            tags: req.tags.clone(),
            archived: false,
            created_by: req.created_by.clone(),
            created_at: "2024-06-01T00:00:00Z".to_string(),
            updated_by: None,
            updated_at: None,
        };
        tasks.push(task.clone());
        Ok(task)
    }

    async fn create_task_note(
        &self,
        task_id: &str,
        req: &CreateNoteRequest,
    ) -> ApiResult<TaskNote> {
        self.record("create_task_note")?;
        let mut notes = self.notes.lock().unwrap();
        let note = TaskNote {
            id: format!("n-{}", notes.len() + 1),
            task_id: task_id.to_string(),
            content: req.content.clone(),
            created_by: req.created_by.clone(),
            created_at: "2024-06-01T00:00:00Z".to_string(),
            updated_by: None,
            updated_at: None,
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn update_task(&self, id: &str, req: &UpdateTaskRequest) -> ApiResult<Task> {
        self.record("update_task")?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("task not found"))?;
        if let Some(status) = &req.status {
            task.status = status.clone();
        }
        if let Some(priority) = &req.priority {
            task.priority = Some(priority.clone());
        }
        if let Some(assigned_to) = &req.assigned_to {
            task.assigned_to = Some(assigned_to.clone());
        }
        if let Some(description) = &req.description {
            task.description = Some(description.clone());
        }
        task.updated_by = Some(req.updated_by.clone());
        Ok(task.clone())
    }

    async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.record("list_projects")?;
        Ok(self.projects.lock().unwrap().clone())
    }

    async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.record("get_project")?;
        let projects = self.projects.lock().unwrap();
        projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("project not found"))
    }

    async fn get_project_tasks(&self, id: &str) -> ApiResult<Vec<Task>> {
        self.record("get_project_tasks")?;
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(id))
            .cloned()
            .collect())
    }

    async fn health(&self) -> ApiResult<()> {
        self.record("health")?;
        Ok(())
    }
}

pub(crate) fn task(id: &str, name: &str, status: &str) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        status: status.to_string(),
        priority: None,
        assigned_to: None,
        project_id: None,
        due_date: None,
        start_date: None,
        completed_at: None,
        tags: Vec::new(),
        archived: false,
        created_by: "alice".to_string(),
        created_at: "2024-01-01T09:00:00Z".to_string(),
        updated_by: None,
        updated_at: None,
    }
}

pub(crate) fn note(id: &str, task_id: &str, content: &str) -> TaskNote {
    TaskNote {
        id: id.to_string(),
        task_id: task_id.to_string(),
        content: content.to_string(),
        created_by: "alice".to_string(),
        created_at: "2024-01-02T09:00:00Z".to_string(),
        updated_by: None,
        updated_at: None,
    }
}

pub(crate) fn project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_by: "alice".to_string(),
        created_at: "2024-01-01T08:00:00Z".to_string(),
    }
}
