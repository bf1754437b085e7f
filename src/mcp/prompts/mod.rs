//! Prompt catalog and dispatch.
//!
//! Generators are pure functions of their arguments. Omitted optional
//! arguments fall back to documented defaults; the only error paths are
//! an unknown prompt name and a missing required argument.

mod templates;

#[cfg(test)]
mod prompts_test;

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unknown prompt: {name}")]
    #[diagnostic(
        code(taskdeck::prompts::unknown),
        help("list_prompts enumerates the available prompt names")
    )]
    Unknown { name: String },

    #[error("{argument} is required for prompt {prompt}")]
    #[diagnostic(code(taskdeck::prompts::missing_argument))]
    MissingArgument {
        prompt: &'static str,
        argument: &'static str,
    },
}

/// One argument a prompt accepts.
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// One entry in the prompt catalog.
pub struct PromptSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

/// Every prompt this server exposes, in a fixed listing order.
pub fn catalog() -> &'static [PromptSpec] {
    &[
        PromptSpec {
            name: "create_task_guide",
            description: "Step-by-step guidance for creating a well-formed task",
            args: &[
                ArgSpec {
                    name: "task_name",
                    description: "Name of the task being created",
                    required: true,
                },
                ArgSpec {
                    name: "complexity",
                    description: "simple, medium, or complex (default: medium)",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "task_status_review",
            description: "Checklist for reviewing a task status transition",
            args: &[
                ArgSpec {
                    name: "task_id",
                    description: "Task under review",
                    required: true,
                },
                ArgSpec {
                    name: "current_status",
                    description: "Status the task currently has",
                    required: false,
                },
                ArgSpec {
                    name: "new_status",
                    description: "Status the task is moving to",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "daily_standup",
            description: "Template for preparing a daily standup report",
            args: &[
                ArgSpec {
                    name: "user_id",
                    description: "User the standup is for",
                    required: true,
                },
                ArgSpec {
                    name: "standup_type",
                    description: "individual or team (default: individual)",
                    required: false,
                },
                ArgSpec {
                    name: "planning_horizon",
                    description: "today or week (default: today)",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "project_kickoff",
            description: "Agenda and task seeding plan for a project kickoff",
            args: &[
                ArgSpec {
                    name: "project_name",
                    description: "Name of the project being started",
                    required: true,
                },
                ArgSpec {
                    name: "project_type",
                    description: "software, research, or general (default: general)",
                    required: false,
                },
                ArgSpec {
                    name: "duration",
                    description: "Expected duration, free text",
                    required: false,
                },
                ArgSpec {
                    name: "team_size",
                    description: "small, medium, or large (default: small)",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "project_retrospective",
            description: "Structure for running a project retrospective",
            args: &[
                ArgSpec {
                    name: "project_id",
                    description: "Project being reviewed",
                    required: true,
                },
                ArgSpec {
                    name: "review_period",
                    description: "sprint, month, or quarter (default: sprint)",
                    required: false,
                },
                ArgSpec {
                    name: "project_outcome",
                    description: "Outcome summary, free text",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "task_breakdown",
            description: "Guide for splitting a large task into subtasks",
            args: &[
                ArgSpec {
                    name: "parent_task",
                    description: "Task to break down",
                    required: true,
                },
                ArgSpec {
                    name: "timeline",
                    description: "Target timeline, free text",
                    required: false,
                },
                ArgSpec {
                    name: "team_size",
                    description: "Number of people available, free text",
                    required: false,
                },
            ],
        },
        PromptSpec {
            name: "task_handoff",
            description: "Checklist for handing a task from one person to another",
            args: &[
                ArgSpec {
                    name: "task_id",
                    description: "Task being handed off",
                    required: true,
                },
                ArgSpec {
                    name: "from_user",
                    description: "Current owner",
                    required: true,
                },
                ArgSpec {
                    name: "to_user",
                    description: "New owner",
                    required: true,
                },
            ],
        },
    ]
}

/// Render a prompt by name.
pub fn render(name: &str, args: &HashMap<String, String>) -> Result<String, PromptError> {
    let required = |argument: &'static str| -> Result<&str, PromptError> {
        args.get(argument)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .ok_or(PromptError::MissingArgument {
                prompt: spec_name(name),
                argument,
            })
    };
    let optional =
        |argument: &str, default: &'static str| -> String {
            args.get(argument)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

    match name {
        "create_task_guide" => Ok(templates::create_task_guide(
            required("task_name")?,
            &optional("complexity", "medium"),
        )),
        "task_status_review" => Ok(templates::task_status_review(
            required("task_id")?,
            &optional("current_status", "unknown"),
            &optional("new_status", "unchanged"),
        )),
        "daily_standup" => Ok(templates::daily_standup(
            required("user_id")?,
            &optional("standup_type", "individual"),
            &optional("planning_horizon", "today"),
        )),
        "project_kickoff" => Ok(templates::project_kickoff(
            required("project_name")?,
            &optional("project_type", "general"),
            &optional("duration", "unspecified"),
            &optional("team_size", "small"),
        )),
        "project_retrospective" => Ok(templates::project_retrospective(
            required("project_id")?,
            &optional("review_period", "sprint"),
            &optional("project_outcome", "not stated"),
        )),
        "task_breakdown" => Ok(templates::task_breakdown(
            required("parent_task")?,
            &optional("timeline", "unspecified"),
            &optional("team_size", "unspecified"),
        )),
        "task_handoff" => Ok(templates::task_handoff(
            required("task_id")?,
            required("from_user")?,
            required("to_user")?,
        )),
        _ => Err(PromptError::Unknown {
            name: name.to_string(),
        }),
    }
}

/// Map a runtime name back to the catalog's static name for error reporting.
fn spec_name(name: &str) -> &'static str {
    catalog()
        .iter()
        .map(|spec| spec.name)
        .find(|spec| *spec == name)
        .unwrap_or("unknown")
}
