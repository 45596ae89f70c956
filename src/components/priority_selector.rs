//! Priority Selector Component
//!
//! `<select>` for the priority of new todos.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority dropdown
#[component]
pub fn PrioritySelector(
    current: Signal<Priority>,
    #[prop(into)] on_change: Callback<Priority>,
) -> impl IntoView {
    view! {
        <select
            class="priority-select"
            on:change=move |ev| {
                match event_target_value(&ev).parse::<Priority>() {
                    Ok(priority) => on_change.run(priority),
                    Err(e) => web_sys::console::warn_1(&format!("[FORM] {}", e).into()),
                }
            }
        >
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                view! {
                    <option
                        value=priority.as_str()
                        prop:selected=move || current.get() == priority
                    >
                        {priority.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
