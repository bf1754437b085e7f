//! Pure report formatters.
//!
//! Every function here maps already-fetched entities to deterministic
//! multi-line text. No I/O: the evaluation instant is passed in so overdue
//! computation is testable.

mod dashboard;
mod projects;
mod stats;
mod tasks;
mod text;


pub use dashboard::{project_dashboard, system_dashboard, user_dashboard};
pub use projects::{project_details, project_tasks, projects_overview};
pub use stats::{COMPLETE_STATUS, STATUS_DISPLAY_ORDER, TaskStats, completion_rate, is_overdue, top_n};
pub use tasks::{search_results, task_details, tasks_overview, user_tasks};
pub use text::{
    NO_DUE_DATE, NONE_PLACEHOLDER, PROJECT_DESCRIPTION_LIMIT, PROJECT_TASK_LIMIT, RECENT_LIMIT,
    TASK_DESCRIPTION_LIMIT, TASK_LIST_LIMIT, UNASSIGNED, opt_or, truncate_text,
};
