//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::composer::{Composer, ComposerStoreFields};
use crate::models::PriorityFilter;
use crate::todos::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, in insertion order
    pub todos: TodoList,
    /// Input row (draft text, selected priority, edit target)
    pub composer: Composer,
    /// Active view filter
    pub filter: PriorityFilter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper holds at most one write guard at a time.

/// Submit the input row: add a todo, or save the edit in progress.
///
/// Returns the id of the affected todo, None when nothing changed.
pub fn store_submit(store: &AppStore) -> Option<u32> {
    let submission = store.composer().write().take_submission()?;
    store.todos().write().apply(submission)
}

/// Enter edit mode for `id`, preloading its text into the input
pub fn store_begin_edit(store: &AppStore, id: u32) -> bool {
    let todo = store.todos().with_untracked(|list| list.get(id).cloned());
    match todo {
        Some(todo) => {
            store.composer().write().begin_edit(&todo);
            true
        }
        None => false,
    }
}

pub fn store_cancel_edit(store: &AppStore) {
    if store.composer().with_untracked(Composer::is_editing) {
        store.composer().write().cancel_edit();
    }
}

/// Remove a todo by ID, dropping the edit if it targeted that todo
pub fn store_remove_todo(store: &AppStore, id: u32) -> bool {
    let removed = store.todos().write().remove(id).is_some();
    if removed && store.composer().editing().get_untracked() == Some(id) {
        store.composer().write().forget(id);
    }
    removed
}

/// Flip completion by ID, returning the new flag
pub fn store_toggle_completed(store: &AppStore, id: u32) -> Option<bool> {
    store.todos().write().toggle_completed(id)
}

pub fn store_set_filter(store: &AppStore, filter: PriorityFilter) {
    if store.filter().get_untracked() != filter {
        store.filter().set(filter);
    }
}
