//! Todo Item Component
//!
//! A single row in the list.

use leptos::prelude::*;

use crate::composer::ComposerStoreFields;
use crate::models::Todo;
use crate::store::{
    store_begin_edit, store_remove_todo, store_toggle_completed, use_app_store,
    AppStateStoreFields,
};

/// A single todo row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let priority = todo.priority;
    let text = todo.text;
    let is_editing = move || store.composer().editing().get() == Some(id);

    let row_class = move || {
        let mut c = String::from("todo-row");
        if completed { c.push_str(" completed"); }
        if is_editing() { c.push_str(" editing"); }
        c
    };
    let text_class = format!(
        "todo-text {}{}",
        priority.css_class(),
        if completed { " completed" } else { "" }
    );

    view! {
        <li class=row_class>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| {
                    if let Some(done) = store_toggle_completed(&store, id) {
                        web_sys::console::log_1(&format!("[LIST] Todo #{} completed={}", id, done).into());
                    }
                }
            />

            // Text
            <span class=text_class title=priority.label()>{text}</span>

            // Edit button
            <button
                class="edit-btn"
                title="Edit"
                on:click=move |_| {
                    if store_begin_edit(&store, id) {
                        web_sys::console::log_1(&format!("[LIST] Editing todo #{}", id).into());
                    }
                }
            >
                "✎"
            </button>

            // Delete button
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |_| {
                    if store_remove_todo(&store, id) {
                        web_sys::console::log_1(&format!("[LIST] Deleted todo #{}", id).into());
                    }
                }
            >
                "×"
            </button>
        </li>
    }
}
