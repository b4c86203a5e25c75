//! TODO'Meter Frontend App
//!
//! Main application component: creates the store, provides it via context
//! and lays out the header, form and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoList};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    view! {
        <div class="app-shell">
            <h1 class="app-title">
                {"TODO'Meter"
                    .chars()
                    .map(|c| view! { <span>{c.to_string()}</span> })
                    .collect_view()}
            </h1>

            <NewTodoForm/>

            <TodoList/>
        </div>
    }
}
