//! Composer State
//!
//! The input row: draft text, priority for new entries, and the item under edit.

use reactive_stores::Store;

use crate::models::{Priority, Todo};

/// What a submit of the input row asks the list to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Append a new todo
    Add { text: String, priority: Priority },
    /// Replace the text of an existing todo
    Save { id: u32, text: String },
}

/// Input row state
#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct Composer {
    pub draft: String,
    pub priority: Priority,
    /// Id of the todo being edited (None = adding)
    pub editing: Option<u32>,
}

impl Composer {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter edit mode for `todo`, preloading its text
    pub fn begin_edit(&mut self, todo: &Todo) {
        self.editing = Some(todo.id);
        self.draft = todo.text.clone();
    }

    /// Leave edit mode and drop the draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Cancel the edit if it targets `id`. Returns whether it did.
    pub fn forget(&mut self, id: u32) -> bool {
        if self.editing == Some(id) {
            self.cancel_edit();
            true
        } else {
            false
        }
    }

    /// Turn the current draft into a submission and reset the row.
    ///
    /// A blank draft yields nothing and leaves the state untouched.
    pub fn take_submission(&mut self) -> Option<Submission> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        let submission = match self.editing.take() {
            Some(id) => Submission::Save { id, text },
            None => Submission::Add {
                text,
                priority: std::mem::take(&mut self.priority),
            },
        };
        Some(submission)
    }
}
