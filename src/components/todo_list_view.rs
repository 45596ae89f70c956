//! Todo List View Component
//!
//! Displays the todos that pass the active priority filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::filter::filter_by_priority;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filtered todo list
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        store.todos().with(|list| filter_by_priority(list.items(), filter))
    });

    let empty_message = move || {
        if store.todos().with(|list| list.is_empty()) {
            "Nothing to do yet."
        } else {
            "No todos with this priority."
        }
    };

    view! {
        <Show
            when=move || visible.with(|todos| !todos.is_empty())
            fallback=move || view! { <p class="empty-state">{empty_message}</p> }
        >
            <ul class="todo-list">
                <For
                    each=move || visible.get()
                    key=|todo| {
                        // Every mutable field is part of the key so edits re-render the row
                        (todo.id, todo.text.clone(), todo.completed, todo.priority)
                    }
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </ul>
        </Show>
    }
}
