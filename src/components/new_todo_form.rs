//! New Todo Form Component
//!
//! Input row for adding todos and for saving the edit in progress.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::PrioritySelector;
use crate::composer::ComposerStoreFields;
use crate::models::Priority;
use crate::store::{store_cancel_edit, store_submit, use_app_store, AppStateStoreFields};

/// Form for creating a todo, or confirming an edit
///
/// Submitting (button or Enter) adds a todo, or saves the edit when one is
/// in progress. Blank input does nothing.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let editing = move || store.composer().editing().get();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let was_editing = store.composer().editing().get_untracked();
        match (store_submit(&store), was_editing) {
            (Some(id), Some(_)) => {
                web_sys::console::log_1(&format!("[FORM] Saved todo #{}", id).into());
            }
            (Some(id), None) => {
                web_sys::console::log_1(&format!("[FORM] Added todo #{}", id).into());
            }
            (None, _) => {}
        }
    };

    let current_priority = Signal::derive(move || store.composer().priority().get());
    let on_priority = Callback::new(move |priority: Priority| {
        store.composer().priority().set(priority);
    });

    view! {
        <form class=move || if editing().is_some() { "new-todo-form editing" } else { "new-todo-form" } on:submit=submit>
            <div class="new-todo-row">
                <input
                    type="text"
                    class="todo-input"
                    placeholder=move || match editing() {
                        Some(id) => format!("Edit todo #{}", id),
                        None => "Add new todo".to_string(),
                    }
                    prop:value=move || store.composer().draft().get()
                    on:input=move |ev| {
                        let Some(input) = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        store.composer().draft().set(input.value());
                    }
                />
                <PrioritySelector current=current_priority on_change=on_priority />
                <button
                    type="submit"
                    class="submit-btn"
                    title=move || if editing().is_some() { "Save" } else { "Add" }
                >
                    {move || if editing().is_some() { "✓" } else { "+" }}
                </button>
            </div>

            {move || editing().map(|id| view! {
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| {
                        store_cancel_edit(&store);
                        web_sys::console::log_1(&format!("[FORM] Cancelled edit of #{}", id).into());
                    }
                >
                    "Cancel edit (#" {id} ")"
                </button>
            })}
        </form>
    }
}
