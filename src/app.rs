//! To-Do List App
//!
//! Root component: input row, filter, list, and bottom navigation.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BottomNav, FilterSelector, NewTodoForm, TodoListView};
use crate::filter::count_completed;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    let store = Store::new(AppState::new());
    provide_context(store);

    web_sys::console::log_1(&"[APP] Mounted".into());

    let summary = move || {
        store.todos().with(|list| {
            format!("{} items, {} completed", list.len(), count_completed(list.items()))
        })
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To-Do List"</h1>

                <NewTodoForm />

                <div class="filter-row">
                    <FilterSelector />
                </div>

                <TodoListView />

                <p class="item-count">{summary}</p>
            </main>

            <BottomNav />
        </div>
    }
}
