//! Prompt template bodies.
//!
//! Each generator concatenates fixed markdown sections with the supplied
//! values interpolated verbatim. Variant selection is a plain match on the
//! dispatch argument, with the default variant as the fallback arm.

pub fn create_task_guide(task_name: &str, complexity: &str) -> String {
    let mut out = format!("# Creating Task: {task_name}\n\n");
    out.push_str(
        "Work through the checklist below before calling the `create_task` tool.\n\n\
         ## Required fields\n\
         - **name** — a short, action-oriented title\n\
         - **created_by** — who is creating this task\n\
         - **initial_note** — context for whoever picks the task up\n\n",
    );
    match complexity {
        "simple" => out.push_str(
            "## Simple task\n\
             - Keep the description to one or two sentences.\n\
             - Assign it directly if the owner is obvious.\n\
             - Skip tags unless the team already uses them for filtering.\n",
        ),
        "complex" => out.push_str(
            "## Complex task\n\
             - Write a description covering goal, constraints, and definition of done.\n\
             - Set a priority and a due date; complex work drifts without both.\n\
             - Add tags for every workstream this task touches.\n\
             - Consider using the `task_breakdown` prompt to split it into subtasks first.\n",
        ),
        _ => out.push_str(
            "## Medium task\n\
             - Describe the goal and the definition of done in a short paragraph.\n\
             - Set a priority; add a due date if one exists.\n\
             - Assign it or leave unassigned for triage.\n",
        ),
    }
    out.push_str(
        "\n## After creation\n\
         Verify the task with `get_task_details` and confirm the initial note attached.\n",
    );
    out
}

pub fn task_status_review(task_id: &str, current_status: &str, new_status: &str) -> String {
    format!(
        "# Status Review for Task {task_id}\n\n\
         Proposed transition: **{current_status}** -> **{new_status}**\n\n\
         ## Before changing status\n\
         - Read the task details and its notes (`get_task_details`).\n\
         - Confirm the work matching the new status is actually done or started.\n\
         - If moving to **Blocked**, record what it is blocked on in a progress note.\n\
         - If moving to **Complete**, confirm acceptance criteria from the description are met.\n\n\
         ## Making the change\n\
         Use `update_task_progress` with the new status and a progress note explaining the\n\
         transition, so the task history stays self-explanatory.\n"
    )
}

pub fn daily_standup(user_id: &str, standup_type: &str, planning_horizon: &str) -> String {
    let mut out = format!("# Daily Standup: {user_id}\n\n");
    match standup_type {
        "team" => out.push_str(
            "## Team round\n\
             For each team member, pull their dashboard (`taskdeck://dashboard/user/{id}`)\n\
             and summarize:\n\
             - What moved since yesterday\n\
             - What is in progress now\n\
             - Anything Blocked, with the blocker named\n\n",
        ),
        _ => out.push_str(
            "## Individual update\n\
             Pull this user's dashboard (`taskdeck://dashboard/user/{id}`) and prepare:\n\
             - **Done**: tasks completed since the last standup\n\
             - **Doing**: tasks currently In Progress\n\
             - **Blocked**: anything waiting on someone else\n\n",
        ),
    }
    match planning_horizon {
        "week" => out.push_str(
            "## Planning horizon: this week\n\
             List the tasks due within the next seven days and flag any that are\n\
             overdue or at risk. Suggest reprioritization where the load looks uneven.\n",
        ),
        _ => out.push_str(
            "## Planning horizon: today\n\
             Pick the one or two tasks to finish today. Anything overdue goes first.\n",
        ),
    }
    out
}

pub fn project_kickoff(
    project_name: &str,
    project_type: &str,
    duration: &str,
    team_size: &str,
) -> String {
    let mut out = format!(
        "# Project Kickoff: {project_name}\n\n\
         Planned duration: {duration}\n\n"
    );
    match project_type {
        "software" => out.push_str(
            "## Software project setup\n\
             Seed the project with tasks for:\n\
             - Repository and CI setup\n\
             - Architecture/design review\n\
             - Milestone definitions with acceptance criteria\n\
             - A release checklist task, created early and kept updated\n\n",
        ),
        "research" => out.push_str(
            "## Research project setup\n\
             Seed the project with tasks for:\n\
             - Literature/prior-art review\n\
             - Hypothesis and success-criteria write-up\n\
             - Experiment design and data collection\n\
             - A findings write-up task due before the project end\n\n",
        ),
        _ => out.push_str(
            "## Project setup\n\
             Seed the project with tasks for:\n\
             - A scoping document describing what done means\n\
             - The first concrete deliverable\n\
             - A mid-point review checkpoint\n\n",
        ),
    }
    match team_size {
        "large" => out.push_str(
            "## Large team\n\
             Assign an owner per workstream and create one coordination task per\n\
             workstream pair that must integrate. Run standups per workstream.\n",
        ),
        "medium" => out.push_str(
            "## Medium team\n\
             Assign every seeded task an owner up front and agree on a weekly review\n\
             of the project dashboard.\n",
        ),
        _ => out.push_str(
            "## Small team\n\
             Keep tasks unassigned in a shared pool; whoever is free takes the top\n\
             priority. Review the project dashboard together twice a week.\n",
        ),
    }
    out
}

pub fn project_retrospective(
    project_id: &str,
    review_period: &str,
    project_outcome: &str,
) -> String {
    let period_label = match review_period {
        "month" => "the past month",
        "quarter" => "the past quarter",
        _ => "the last sprint",
    };
    format!(
        "# Retrospective: Project {project_id}\n\n\
         Period under review: {period_label}\n\
         Stated outcome: {project_outcome}\n\n\
         ## Gather the data\n\
         - Pull `taskdeck://dashboard/project/{project_id}` for the completion and\n\
           overdue numbers.\n\
         - Pull `taskdeck://project/{project_id}/tasks` and note which tasks spent\n\
           time Blocked.\n\n\
         ## Discussion structure\n\
         1. **What went well** — completed tasks that shipped without churn\n\
         2. **What dragged** — overdue tasks and tasks with long Blocked periods\n\
         3. **What we change** — at most three concrete process changes, each\n\
            recorded as a new task with an owner\n\n\
         ## Close out\n\
         File the agreed changes as tasks via `create_task` so they survive the meeting.\n"
    )
}

pub fn task_breakdown(parent_task: &str, timeline: &str, team_size: &str) -> String {
    format!(
        "# Breaking Down: {parent_task}\n\n\
         Timeline: {timeline}\n\
         People available: {team_size}\n\n\
         ## How to split\n\
         - Each subtask should be completable by one person in a few days at most.\n\
         - Name subtasks by their deliverable, not their activity.\n\
         - Order subtasks by dependency; anything parallelizable gets its own assignee.\n\n\
         ## Creating the subtasks\n\
         For each subtask call `create_task` with:\n\
         - a name referencing the parent (\"{parent_task}: <deliverable>\")\n\
         - the parent's project_id so they roll up in the project dashboard\n\
         - an initial note stating which subtasks it depends on\n\n\
         Finally, add a progress note to the parent listing the subtask IDs.\n"
    )
}

pub fn task_handoff(task_id: &str, from_user: &str, to_user: &str) -> String {
    format!(
        "# Task Handoff: {task_id}\n\n\
         From: {from_user}\n\
         To: {to_user}\n\n\
         ## Outgoing owner ({from_user})\n\
         - Add a progress note summarizing current state, open questions, and\n\
           where the work lives.\n\
         - Flag anything that will become Blocked without action this week.\n\n\
         ## Incoming owner ({to_user})\n\
         - Read the full task details and notes (`get_task_details`).\n\
         - Confirm the due date is still realistic; renegotiate it now if not.\n\n\
         ## Completing the handoff\n\
         Call `update_task_progress` reassigning the task to {to_user}, with a\n\
         progress note recording the handoff from {from_user}.\n"
    )
}
