//! Frontend Models
//!
//! Todo record and display filter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest title we keep; anything beyond this is silently cut at the
/// input boundary and when mapping remote items.
pub const MAX_TITLE_LEN: usize = 35;

/// A single task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// New pending todo with a fresh client-side id
    pub fn new(title: &str) -> Self {
        Self::with_completed(title, false)
    }

    /// New todo with an explicit completion flag (used by remote seeding)
    pub fn with_completed(title: &str, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: truncate_title(title),
            completed,
        }
    }
}

/// Cut a title down to `MAX_TITLE_LEN` characters, whole chars only
pub fn truncate_title(title: &str) -> String {
    title.chars().take(MAX_TITLE_LEN).collect()
}

/// Display filter over the todo list. Selects which subset is rendered,
/// never touches the underlying list or its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Display order of the filter buttons
    pub const BUTTONS: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Pending];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    /// Whether a todo is visible under this filter
    pub fn accepts(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => todo.completed,
            Filter::Pending => !todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_pending_with_unique_id() {
        let a = Todo::new("Cleaning the sword");
        let b = Todo::new("Cleaning the sword");
        assert!(!a.completed);
        assert_eq!(a.title, "Cleaning the sword");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn long_title_is_cut_to_limit() {
        let long = "0".repeat(MAX_TITLE_LEN + 1);
        let todo = Todo::new(&long);
        assert_eq!(todo.title.chars().count(), MAX_TITLE_LEN);
        assert_eq!(todo.title, "0".repeat(MAX_TITLE_LEN));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let long = "ä".repeat(MAX_TITLE_LEN + 5);
        assert_eq!(truncate_title(&long), "ä".repeat(MAX_TITLE_LEN));
    }

    #[test]
    fn short_title_is_untouched() {
        assert_eq!(truncate_title("Becoming Mario Bros"), "Becoming Mario Bros");
    }

    #[test]
    fn filter_accepts_by_completion() {
        let pending = Todo::new("a");
        let done = Todo::with_completed("b", true);
        assert!(Filter::All.accepts(&pending) && Filter::All.accepts(&done));
        assert!(Filter::Completed.accepts(&done) && !Filter::Completed.accepts(&pending));
        assert!(Filter::Pending.accepts(&pending) && !Filter::Pending.accepts(&done));
    }
}
