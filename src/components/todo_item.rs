//! Todo Item Component
//!
//! One todo row: grip, checkbox, title and delete button. Forwards every
//! user intent to the store.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Todo;
use crate::store::{store_remove_todo, store_set_completed, store_swap_todos, use_app_store};

use leptos_dragdrop::*;

/// A single todo row in the list
#[component]
pub fn TodoItem(todo: Todo, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id.clone();
    let completed = todo.completed;

    // The row is only draggable while the grip is held, so text selection
    // and checkbox clicks keep working everywhere else.
    let (grip_held, set_grip_held) = signal(false);

    let on_drag_start = make_on_drag_start(dnd, id.clone());
    let on_drag_over = make_on_drag_over();
    let on_drop = make_on_drop(dnd, id.clone(), move |dragged: String, target: String| {
        web_sys::console::log_1(&format!("[DND] swap {dragged} <-> {target}").into());
        store_swap_todos(&store, &dragged, &target);
    });
    let on_drag_end = move |_ev: web_sys::DragEvent| {
        set_grip_held.set(false);
        end_drag(&dnd);
    };

    let row_id = id.clone();
    let row_class = move || {
        if is_dragging(&dnd, &row_id) {
            "todo-element dragging"
        } else {
            "todo-element"
        }
    };

    let toggle_id = id.clone();
    let on_toggle = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        store_set_completed(&store, &toggle_id, input.checked());
    };

    let delete_id = id.clone();

    view! {
        <li
            data-testid="todo-test"
            class=row_class
            draggable=move || if grip_held.get() { "true" } else { "false" }
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <button name="dragButton" class="gripper" on:mousedown=move |_| set_grip_held.set(true)>
                "☰"
            </button>
            <input
                type="checkbox"
                name="complete"
                class="complete-box"
                data-id=id.clone()
                checked=completed
                on:change=on_toggle
            />
            <h3 class=move || if completed { "todo-title line-through" } else { "todo-title" }>
                {todo.title.clone()}
            </h3>
            <button
                name="deleteButton"
                class="delete-btn"
                data-id=id.clone()
                on:click=move |_| store_remove_todo(&store, &delete_id)
            >
                "Delete"
            </button>
        </li>
    }
}
