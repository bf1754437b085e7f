//! MCP server: tools, resources, and prompts over a task API backend.
//!
//! Generic over `C: TaskApi` so handler tests run against an in-memory
//! stub. Every tool validates its required arguments before issuing any
//! backend call; validation failures never reach the network.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;
use tracing::{info, warn};

use crate::client::{ApiError, TaskApi};
use crate::format;
use crate::mcp::params::{
    CreateTaskParams, GetTaskDetailsParams, SearchTasksParams, UpdateTaskProgressParams,
    require_arg,
};
use crate::mcp::resources::{self, SCHEME, fetch_task_context};
use crate::mcp::prompts::{self, PromptError};
use crate::models::{CreateNoteRequest, CreateTaskRequest, TaskFilter, UpdateTaskRequest};
use crate::monitor::MetricsSink;

/// Main MCP server coordinator.
#[derive(Clone)]
pub struct TaskDeckServer<C: TaskApi> {
    api: Arc<C>,
    metrics: Arc<dyn MetricsSink>,
    name: String,
    version: String,
    tool_router: ToolRouter<Self>,
}

/// Wrap a backend failure as a protocol error with the failing operation named.
fn api_error(operation: &'static str, error: ApiError) -> McpError {
    if error.is_not_found() {
        McpError::resource_not_found(format!("failed to {operation}: {error}"), None)
    } else {
        McpError::internal_error(format!("failed to {operation}: {error}"), None)
    }
}

/// Text result plus the tool's structured metadata map.
fn tool_result(text: String, metadata: serde_json::Value) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(metadata);
    result
}

#[tool_router]
impl<C: TaskApi + 'static> TaskDeckServer<C> {
    pub fn new(
        api: Arc<C>,
        metrics: Arc<dyn MetricsSink>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            api,
            metrics,
            name: name.into(),
            version: version.into(),
            tool_router: Self::tool_router(),
        }
    }

    /// Render a named prompt. The `prompts.<name>` counter moves only
    /// when the render succeeds; arbitrary client-supplied names must
    /// not mint counter keys.
    pub(crate) fn render_prompt(
        &self,
        name: &str,
        args: &HashMap<String, String>,
    ) -> Result<String, McpError> {
        let text = prompts::render(name, args).map_err(|error| match error {
            PromptError::Unknown { .. } | PromptError::MissingArgument { .. } => {
                McpError::invalid_params(error.to_string(), None)
            }
        })?;
        self.metrics.incr(&format!("prompts.{name}"));
        Ok(text)
    }

    #[tool(
        description = "Create a new task with an initial note. Required: name, created_by, initial_note. Optional: description, priority, assigned_to, due_date (ISO-8601), project_id, tags."
    )]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let name = require_arg(Some(&p.name), "name")?;
        let created_by = require_arg(Some(&p.created_by), "created_by")?;
        let initial_note = require_arg(p.initial_note.as_deref(), "initial_note")?;
        self.metrics.incr("tools.create_task");

        let req = CreateTaskRequest {
            name: name.to_string(),
            description: p.description.clone(),
            priority: p.priority.clone(),
            assigned_to: p.assigned_to.clone(),
            project_id: p.project_id.clone(),
            due_date: p.due_date.clone(),
            tags: p.tags.clone().unwrap_or_default(),
            created_by: created_by.to_string(),
        };
        let task = self
            .api
            .create_task(&req)
            .await
            .map_err(|e| api_error("create task", e))?;
        info!(task_id = %task.id, "task created");

        let note_req = CreateNoteRequest {
            content: initial_note.to_string(),
            created_by: created_by.to_string(),
        };
        let note_attached = match self.api.create_task_note(&task.id, &note_req).await {
            Ok(_) => true,
            Err(error) => {
                warn!(task_id = %task.id, %error, "initial note attach failed");
                false
            }
        };

        let mut text = format!("Created task '{}' ({})\n", task.name, task.id);
        text.push_str(&format!("Status: {}\n", task.status));
        if note_attached {
            text.push_str("Initial note attached.\n");
        } else {
            text.push_str("Warning: the initial note could not be attached.\n");
        }
        Ok(tool_result(
            text,
            json!({ "task": task.id, "success": true }),
        ))
    }

    #[tool(
        description = "Get a task's full details: fields, notes, and its project when it has one."
    )]
    pub async fn get_task_details(
        &self,
        params: Parameters<GetTaskDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = require_arg(Some(&params.0.task_id), "task_id")?;
        self.metrics.incr("tools.get_task_details");

        let (task, notes, project) = fetch_task_context(self.api.as_ref(), task_id)
            .await
            .map_err(|e| e.into_mcp())?;
        let text = format::task_details(&task, &notes, project.as_ref(), Utc::now());
        let metadata = json!({
            "task": task.id,
            "notes": notes.len(),
            "project": project.as_ref().map(|p| p.id.clone()),
            "has_project": project.is_some(),
        });
        Ok(tool_result(text, metadata))
    }

    #[tool(
        description = "Update a task's status, priority, or assignee, optionally recording a progress note. Required: task_id, updated_by, and at least one change."
    )]
    pub async fn update_task_progress(
        &self,
        params: Parameters<UpdateTaskProgressParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let task_id = require_arg(Some(&p.task_id), "task_id")?;
        let updated_by = require_arg(Some(&p.updated_by), "updated_by")?;

        let mut changes_made = Vec::new();
        if p.status.is_some() {
            changes_made.push("status");
        }
        if p.priority.is_some() {
            changes_made.push("priority");
        }
        if p.assigned_to.is_some() {
            changes_made.push("assigned_to");
        }
        let has_field_change = !changes_made.is_empty();
        if !has_field_change && p.progress_note.is_none() {
            return Err(McpError::invalid_params(
                "at least one of status, priority, assigned_to, or progress_note is required",
                None,
            ));
        }
        self.metrics.incr("tools.update_task_progress");

        let mut text = format!("Task {task_id} updated by {updated_by}\n");
        if has_field_change {
            let req = UpdateTaskRequest {
                status: p.status.clone(),
                priority: p.priority.clone(),
                assigned_to: p.assigned_to.clone(),
                description: None,
                updated_by: updated_by.to_string(),
            };
            let task = self
                .api
                .update_task(task_id, &req)
                .await
                .map_err(|e| api_error("update task", e))?;
            text.push_str(&format!("Status: {}\n", task.status));
        }

        if let Some(note) = p.progress_note.as_deref().filter(|n| !n.trim().is_empty()) {
            let note_req = CreateNoteRequest {
                content: note.to_string(),
                created_by: updated_by.to_string(),
            };
            match self.api.create_task_note(task_id, &note_req).await {
                Ok(_) => {
                    changes_made.push("note");
                    text.push_str("Progress note recorded.\n");
                }
                Err(error) if has_field_change => {
                    // Enrichment alongside a field update; tolerated.
                    warn!(task_id, %error, "progress note attach failed");
                    text.push_str("Warning: the progress note could not be recorded.\n");
                }
                Err(error) => return Err(api_error("record progress note", error)),
            }
        }

        let metadata = json!({
            "task": task_id,
            "changes_made": changes_made,
            "update_success": true,
        });
        Ok(tool_result(text, metadata))
    }

    #[tool(
        description = "Search tasks by status, assignee, or creator. All filters optional; omit everything to list all tasks."
    )]
    pub async fn search_tasks(
        &self,
        params: Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        self.metrics.incr("tools.search_tasks");

        let filter = TaskFilter {
            status: p.status.clone(),
            assigned_to: p.assigned_to.clone(),
            created_by: p.created_by.clone(),
        };
        let tasks = self
            .api
            .list_tasks(&filter)
            .await
            .map_err(|e| api_error("search tasks", e))?;
        let text = format::search_results(&tasks);
        let metadata = json!({
            "count": tasks.len(),
            "shown": tasks.len().min(format::TASK_LIST_LIMIT),
        });
        Ok(tool_result(text, metadata))
    }
}

#[tool_handler]
impl<C: TaskApi + 'static> ServerHandler for TaskDeckServer<C> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.server_info = Implementation::new(self.name.clone(), self.version.clone());
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .enable_prompts()
            .build();
        info.instructions = Some(format!(
            "Task and project management over a REST backend. Resources use \
             {SCHEME}:// URIs (task/{{id}}, tasks/overview, tasks/user/{{id}}, \
             project/{{id}}, project/{{id}}/tasks, projects/overview, \
             dashboard/system, dashboard/user/{{id}}, dashboard/project/{{id}})."
        ));
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let entries = [
            (
                format!("{SCHEME}://tasks/overview"),
                "Tasks Overview",
                "Aggregate statistics and recent tasks across the system",
            ),
            (
                format!("{SCHEME}://projects/overview"),
                "Projects Overview",
                "All projects with their descriptions",
            ),
            (
                format!("{SCHEME}://dashboard/system"),
                "System Dashboard",
                "System-wide rollup of projects and tasks",
            ),
        ];
        let resources = entries
            .into_iter()
            .map(|(uri, name, description)| {
                Annotated::new(
                    RawResource {
                        uri,
                        name: name.to_string(),
                        title: None,
                        description: Some(description.to_string()),
                        mime_type: Some("text/markdown".to_string()),
                        size: None,
                        icons: None,
                        meta: None,
                    },
                    None,
                )
            })
            .collect();
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.metrics.incr("resources.read");
        match resources::read(self.api.as_ref(), &request.uri, Utc::now()).await {
            Ok(text) => Ok(ReadResourceResult::new(vec![
                ResourceContents::TextResourceContents {
                    uri: request.uri,
                    mime_type: Some("text/markdown".to_string()),
                    text,
                    meta: None,
                },
            ])),
            Err(error) => {
                self.metrics.incr("errors");
                Err(error.into_mcp())
            }
        }
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let prompts = prompts::catalog()
            .iter()
            .map(|spec| {
                Prompt::new(
                    spec.name,
                    Some(spec.description),
                    Some(
                        spec.args
                            .iter()
                            .map(|arg| {
                                let mut argument = PromptArgument::new(arg.name);
                                argument.description = Some(arg.description.to_string());
                                argument.required = Some(arg.required);
                                argument
                            })
                            .collect(),
                    ),
                )
            })
            .collect();
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let args: HashMap<String, String> = request
            .arguments
            .as_ref()
            .map(|map| {
                map.iter()
                    .map(|(key, value)| {
                        let rendered = match value {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        (key.clone(), rendered)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let text = self.render_prompt(&request.name, &args)?;
        let description = prompts::catalog()
            .iter()
            .find(|spec| spec.name == request.name)
            .map(|spec| spec.description.to_string());
        let mut result =
            GetPromptResult::new(vec![PromptMessage::new_text(PromptMessageRole::User, text)]);
        result.description = description;
        Ok(result)
    }
}
