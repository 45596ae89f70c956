//! Bottom Navigation Component
//!
//! Fixed bar with one tab per priority filter and its item count.

use leptos::prelude::*;

use crate::filter::count_by;
use crate::models::PriorityFilter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn BottomNav() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="bottom-nav">
            {PriorityFilter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                let count = move || store.todos().with(|list| count_by(list.items(), filter));
                view! {
                    <button
                        class=move || if is_active() { "bottom-nav-item active" } else { "bottom-nav-item" }
                        on:click=move |_| {
                            web_sys::console::log_1(&format!("[FILTER] Showing {}", filter.as_str()).into());
                            store_set_filter(&store, filter);
                        }
                    >
                        <div class="bottom-nav-count">{count}</div>
                        <div class="bottom-nav-label">{filter.label()}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
