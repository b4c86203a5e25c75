//! New Todo Form Component
//!
//! Text input plus Add button, global Enter-key submit and the remote
//! seeding button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::models::{truncate_title, MAX_TITLE_LEN};
use crate::remote;
use crate::store::{store_add_todo, store_replace_todos, use_app_store};

/// How long the invalid-input flash stays on, in milliseconds
const INVALID_FLASH_MS: u32 = 300;

/// Form for adding todos, by button or by Enter anywhere on the page
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (invalid, set_invalid) = signal(false);

    let submit = move || {
        let text = title.get();
        if text.trim().is_empty() {
            set_invalid.set(true);
            spawn_local(async move {
                TimeoutFuture::new(INVALID_FLASH_MS).await;
                set_invalid.set(false);
            });
            return;
        }
        store_add_todo(&store, &text);
        set_invalid.set(false);
        set_title.set(String::new());
    };

    // One window-level listener per mount, removed again on unmount
    let enter_listener = window_event_listener(leptos::ev::keypress, move |ev| {
        if ev.key() == "Enter" {
            submit();
        }
    });
    on_cleanup(move || enter_listener.remove());

    let seed_random = move |_| {
        spawn_local(async move {
            if let Ok(seeded) = remote::fetch_random_todos().await {
                web_sys::console::log_1(
                    &format!("[SEED] replacing list with {} remote todos", seeded.len()).into(),
                );
                store_replace_todos(&store, seeded);
            }
        });
    };

    view! {
        <div class="new-todo-form">
            <div class="new-todo-row">
                <input
                    type="text"
                    class=move || if invalid.get() { "todo-input buzz" } else { "todo-input" }
                    placeholder="WRITE SOMETHING"
                    maxlength=MAX_TITLE_LEN.to_string()
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(truncate_title(&input.value()));
                    }
                />
                <button class="add-btn" on:click=move |_| submit()>"Add"</button>
            </div>
            <button class="random-btn" on:click=seed_random>"Random TODOS!"</button>
        </div>
    }
}
