//! List Utilities
//!
//! Pure functional-update helpers over the todo list. Every mutation in the
//! store goes through one of these, so the list is always replaced wholesale
//! with a fresh `Vec` and the transitions stay trivially testable.

use crate::models::{Filter, Todo};

/// List with `todo` appended at the end
pub fn appended(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(todo);
    next
}

/// List without the todo matching `id`; unknown ids leave the list as-is
pub fn without(todos: &[Todo], id: &str) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

/// List with the matching todo's `completed` flag set to `completed`;
/// unknown ids leave the list as-is
pub fn with_completed(todos: &[Todo], id: &str, completed: bool) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    completed,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// List with the two matching todos' positions swapped. A two-element
/// transposition: every other position is unchanged. If either id is
/// missing the list comes back untouched.
pub fn swapped(todos: &[Todo], dragged_id: &str, target_id: &str) -> Vec<Todo> {
    let Some(drag_idx) = todos.iter().position(|todo| todo.id == dragged_id) else {
        return todos.to_vec();
    };
    let Some(drop_idx) = todos.iter().position(|todo| todo.id == target_id) else {
        return todos.to_vec();
    };

    todos
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            if idx == drag_idx {
                todos[drop_idx].clone()
            } else if idx == drop_idx {
                todos[drag_idx].clone()
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// The subset rendered under `filter`, in original list order
pub fn visible(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.accepts(todo))
        .cloned()
        .collect()
}
