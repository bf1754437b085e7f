use std::collections::HashMap;

use super::{PromptError, catalog, render};

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn catalog_lists_all_prompts() {
    let names: Vec<&str> = catalog().iter().map(|spec| spec.name).collect();
    assert_eq!(
        names,
        [
            "create_task_guide",
            "task_status_review",
            "daily_standup",
            "project_kickoff",
            "project_retrospective",
            "task_breakdown",
            "task_handoff",
        ]
    );
}

#[test]
fn catalog_marks_required_arguments() {
    let handoff = catalog()
        .iter()
        .find(|spec| spec.name == "task_handoff")
        .unwrap();
    assert!(handoff.args.iter().all(|arg| arg.required));

    let standup = catalog()
        .iter()
        .find(|spec| spec.name == "daily_standup")
        .unwrap();
    let required: Vec<&str> = standup
        .args
        .iter()
        .filter(|arg| arg.required)
        .map(|arg| arg.name)
        .collect();
    assert_eq!(required, ["user_id"]);
}

#[test]
fn unknown_prompt_is_an_error() {
    let err = render("no_such_prompt", &HashMap::new()).unwrap_err();
    assert!(matches!(err, PromptError::Unknown { .. }));
    assert!(err.to_string().contains("no_such_prompt"));
}

#[test]
fn missing_required_argument_names_the_argument() {
    let err = render("create_task_guide", &HashMap::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "task_name is required for prompt create_task_guide"
    );

    // Blank counts as missing.
    let err = render("daily_standup", &args(&[("user_id", "  ")])).unwrap_err();
    assert!(err.to_string().contains("user_id is required"));
}

#[test]
fn create_task_guide_dispatches_on_complexity() {
    let simple = render(
        "create_task_guide",
        &args(&[("task_name", "Fix login"), ("complexity", "simple")]),
    )
    .unwrap();
    assert!(simple.contains("# Creating Task: Fix login"));
    assert!(simple.contains("## Simple task"));

    let complex = render(
        "create_task_guide",
        &args(&[("task_name", "Migrate DB"), ("complexity", "complex")]),
    )
    .unwrap();
    assert!(complex.contains("## Complex task"));
    assert!(complex.contains("task_breakdown"));
}

#[test]
fn create_task_guide_defaults_to_medium() {
    let text = render("create_task_guide", &args(&[("task_name", "Ship it")])).unwrap();
    assert!(text.contains("## Medium task"));

    // Unrecognized variants also fall back to the default.
    let text = render(
        "create_task_guide",
        &args(&[("task_name", "Ship it"), ("complexity", "gigantic")]),
    )
    .unwrap();
    assert!(text.contains("## Medium task"));
}

#[test]
fn daily_standup_defaults() {
    let text = render("daily_standup", &args(&[("user_id", "jane")])).unwrap();
    assert!(text.contains("# Daily Standup: jane"));
    assert!(text.contains("## Individual update"));
    assert!(text.contains("## Planning horizon: today"));

    let team = render(
        "daily_standup",
        &args(&[
            ("user_id", "jane"),
            ("standup_type", "team"),
            ("planning_horizon", "week"),
        ]),
    )
    .unwrap();
    assert!(team.contains("## Team round"));
    assert!(team.contains("## Planning horizon: this week"));
}

#[test]
fn project_kickoff_variants() {
    let software = render(
        "project_kickoff",
        &args(&[
            ("project_name", "Atlas"),
            ("project_type", "software"),
            ("team_size", "large"),
        ]),
    )
    .unwrap();
    assert!(software.contains("# Project Kickoff: Atlas"));
    assert!(software.contains("## Software project setup"));
    assert!(software.contains("## Large team"));

    let default = render("project_kickoff", &args(&[("project_name", "Atlas")])).unwrap();
    assert!(default.contains("## Project setup"));
    assert!(default.contains("## Small team"));
    assert!(default.contains("Planned duration: unspecified"));
}

#[test]
fn project_retrospective_period_labels() {
    let sprint = render("project_retrospective", &args(&[("project_id", "p1")])).unwrap();
    assert!(sprint.contains("Period under review: the last sprint"));

    let quarter = render(
        "project_retrospective",
        &args(&[("project_id", "p1"), ("review_period", "quarter")]),
    )
    .unwrap();
    assert!(quarter.contains("Period under review: the past quarter"));
}

#[test]
fn task_breakdown_interpolates_parent() {
    let text = render(
        "task_breakdown",
        &args(&[("parent_task", "Rewrite billing"), ("timeline", "3 weeks")]),
    )
    .unwrap();
    assert!(text.contains("# Breaking Down: Rewrite billing"));
    assert!(text.contains("Timeline: 3 weeks"));
    assert!(text.contains("\"Rewrite billing: <deliverable>\""));
}

#[test]
fn task_handoff_includes_both_users_verbatim() {
    let text = render(
        "task_handoff",
        &args(&[
            ("task_id", "t-42"),
            ("from_user", "alice.w"),
            ("to_user", "bob.k"),
        ]),
    )
    .unwrap();
    assert!(text.contains("# Task Handoff: t-42"));
    assert!(text.contains("From: alice.w"));
    assert!(text.contains("To: bob.k"));
    assert!(text.contains("reassigning the task to bob.k"));
}

#[test]
fn task_handoff_requires_every_argument() {
    let err = render(
        "task_handoff",
        &args(&[("task_id", "t-42"), ("from_user", "alice.w")]),
    )
    .unwrap_err();
    assert!(err.to_string().contains("to_user is required"));
}

#[test]
fn generators_are_deterministic() {
    let a = render("task_status_review", &args(&[("task_id", "t-7")])).unwrap();
    let b = render("task_status_review", &args(&[("task_id", "t-7")])).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("**unknown** -> **unchanged**"));
}
