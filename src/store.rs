//! Global Application State Store
//!
//! Uses Leptos reactive_stores. The store is the sole place mutations
//! happen; every helper replaces the todo list wholesale with a fresh
//! `Vec` built by the pure helpers in `crate::list`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Filter, Todo};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered todo list; list order is display order
    pub todos: Vec<Todo>,
    /// Active display filter
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new pending todo. Jumps back to the All filter so the fresh
/// entry is visible whatever filter was active.
pub fn store_add_todo(store: &AppStore, title: &str) {
    let todos = list::appended(&store.todos().get_untracked(), Todo::new(title));
    store.todos().set(todos);
    if store.filter().get_untracked() != Filter::All {
        store.filter().set(Filter::All);
    }
}

/// Remove the todo matching `id`; unknown ids are ignored
pub fn store_remove_todo(store: &AppStore, id: &str) {
    store.todos().set(list::without(&store.todos().get_untracked(), id));
}

/// Set the matching todo's completion flag; unknown ids are ignored
pub fn store_set_completed(store: &AppStore, id: &str, completed: bool) {
    store
        .todos()
        .set(list::with_completed(&store.todos().get_untracked(), id, completed));
}

/// Empty the list; nothing happens when it is already empty
pub fn store_clear_todos(store: &AppStore) {
    if store.todos().get_untracked().is_empty() {
        return;
    }
    store.todos().set(Vec::new());
}

/// Wholesale replacement, used by remote seeding
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    store.todos().set(todos);
}

/// Swap the positions of the dragged and drop-target todos
pub fn store_swap_todos(store: &AppStore, dragged_id: &str, target_id: &str) {
    store
        .todos()
        .set(list::swapped(&store.todos().get_untracked(), dragged_id, target_id));
}

/// Switch the display filter; re-selecting the active one writes nothing
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    if store.filter().get_untracked() == filter {
        return;
    }
    store.filter().set(filter);
}

/// Tracked read of the active filter
pub fn current_filter(store: &AppStore) -> Filter {
    store.filter().get()
}

/// Tracked projection of the subset to render under the active filter
pub fn visible_todos(store: &AppStore) -> Vec<Todo> {
    list::visible(&store.todos().get(), store.filter().get())
}
