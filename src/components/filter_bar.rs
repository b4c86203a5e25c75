//! Filter Bar Component
//!
//! All / Completed / Pending buttons. Display-only: switching filters never
//! touches the underlying list.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{current_filter, store_set_filter, use_app_store};

/// Mutually exclusive view filter buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {Filter::BUTTONS.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || current_filter(&store) == filter;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store_set_filter(&store, filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
