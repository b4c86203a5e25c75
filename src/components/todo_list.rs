//! Todo List Component
//!
//! Renders the visible subset of todos with drag-and-drop reordering, the
//! empty-list hint and the Clear All / filter footer.

use leptos::prelude::*;

use crate::components::{FilterBar, TodoItem};
use crate::store::{store_clear_todos, use_app_store, visible_todos};

use leptos_dragdrop::*;

/// The todo list plus its footer controls
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Active drag source lives here, next to the rows it points into
    let dnd = create_dnd_signals();

    let visible = move || visible_todos(&store);

    view! {
        <ul class="todo-list">
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <h2 class="empty-hint">"There's no todos..."</h2> }
            >
                <For
                    each=visible
                    // completed is part of the key so toggling re-renders the row
                    key=|todo| (todo.id.clone(), todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo dnd=dnd/> }
                />
            </Show>
            <div class="list-footer">
                <button class="clear-btn" on:click=move |_| store_clear_todos(&store)>
                    "Clear All"
                </button>
                <FilterBar/>
            </div>
        </ul>
    }
}
