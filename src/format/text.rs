//! Shared text-rendering vocabulary and helpers.
//!
//! The placeholder strings and display caps below are part of the
//! observable contract; reports must be uniform in shape regardless of
//! how sparse the upstream data is.

/// Placeholder for an absent assignee.
pub const UNASSIGNED: &str = "Unassigned";
/// Placeholder for absent priority, description, or tags.
pub const NONE_PLACEHOLDER: &str = "None";
/// Placeholder for an absent due date.
pub const NO_DUE_DATE: &str = "No due date";

/// Display cap for flat task lists.
pub const TASK_LIST_LIMIT: usize = 10;
/// Display cap for a project's task list.
pub const PROJECT_TASK_LIMIT: usize = 15;
/// Display cap for dashboard "recent" sections.
pub const RECENT_LIMIT: usize = 5;

/// Character cap for task descriptions.
pub const TASK_DESCRIPTION_LIMIT: usize = 150;
/// Character cap for project descriptions.
pub const PROJECT_DESCRIPTION_LIMIT: usize = 100;

/// Hard-cut `text` at `max_chars` characters, appending "..." when cut.
/// The cut is by character count, not word boundaries.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Render an optional field, falling back to the given placeholder.
/// Empty strings count as absent.
pub fn opt_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

/// Append up to `limit` rendered items, then a "... and K more <noun>"
/// line when the list overflows. Items keep their original order.
pub fn push_truncated_list<T>(
    out: &mut String,
    items: &[T],
    limit: usize,
    noun: &str,
    mut line: impl FnMut(&T) -> String,
) {
    for item in items.iter().take(limit) {
        out.push_str(&line(item));
        out.push('\n');
    }
    if items.len() > limit {
        out.push_str(&format!("... and {} more {}\n", items.len() - limit, noun));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_text("hello", 100), "hello");
        let exact: String = "x".repeat(100);
        assert_eq!(truncate_text(&exact, 100), exact);
    }

    #[test]
    fn truncate_hard_cuts_with_ellipsis() {
        let long: String = "a".repeat(120);
        let cut = truncate_text(&long, 100);
        assert_eq!(cut.len(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..100], &long[..100]);
    }

    #[test]
    fn opt_or_treats_empty_as_absent() {
        assert_eq!(opt_or(Some("alice"), UNASSIGNED), "alice");
        assert_eq!(opt_or(Some(""), UNASSIGNED), UNASSIGNED);
        assert_eq!(opt_or(None, NO_DUE_DATE), NO_DUE_DATE);
    }

    #[test]
    fn list_truncation_line() {
        let items: Vec<u32> = (0..16).collect();
        let mut out = String::new();
        push_truncated_list(&mut out, &items, 10, "tasks", |i| format!("- {i}"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[10], "... and 6 more tasks");
    }

    #[test]
    fn list_at_cap_has_no_truncation_line() {
        let items: Vec<u32> = (0..10).collect();
        let mut out = String::new();
        push_truncated_list(&mut out, &items, 10, "tasks", |i| format!("- {i}"));
        assert!(!out.contains("more tasks"));
    }
}
