//! Filter Selector Component
//!
//! `<select>` narrowing the list to one priority.

use leptos::prelude::*;

use crate::models::PriorityFilter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <label class="filter-selector">
            <span class="filter-label">"Show"</span>
            <select
                class="filter-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<PriorityFilter>() {
                        Ok(filter) => {
                            web_sys::console::log_1(&format!("[FILTER] Showing {}", filter.as_str()).into());
                            store_set_filter(&store, filter);
                        }
                        Err(e) => web_sys::console::warn_1(&format!("[FILTER] {}", e).into()),
                    }
                }
            >
                {PriorityFilter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    view! {
                        <option
                            value=filter.as_str()
                            prop:selected=move || store.filter().get() == filter
                        >
                            {filter.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
