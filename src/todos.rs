//! To-Do List
//!
//! Ordered in-memory list of to-do records and the mutations the UI performs on it.

use crate::composer::Submission;
use crate::models::{Priority, Todo};

/// Ordered list of todos with its own id allocator
///
/// Ids come from a counter that only moves forward, so an id is never handed
/// out twice even after deletions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Append a new todo. Blank text is ignored.
    ///
    /// Returns the id of the new item.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Todo::new(id, text.to_string(), priority));
        Some(id)
    }

    /// Remove the todo with `id`, returning it if it existed
    pub fn remove(&mut self, id: u32) -> Option<Todo> {
        let index = self.items.iter().position(|todo| todo.id == id)?;
        Some(self.items.remove(index))
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_completed(&mut self, id: u32) -> Option<bool> {
        self.items
            .iter_mut()
            .find(|todo| todo.id == id)
            .map(|todo| {
                todo.completed = !todo.completed;
                todo.completed
            })
    }

    /// Replace the text of `id`. Blank text is ignored.
    pub fn update_text(&mut self, id: u32, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Apply a composer submission, returning the id it touched
    pub fn apply(&mut self, submission: Submission) -> Option<u32> {
        match submission {
            Submission::Add { text, priority } => self.add(&text, priority),
            Submission::Save { id, text } => self.update_text(id, &text).then_some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        let mut list = TodoList::new();
        list.add("a", Priority::Low);
        list.add("b", Priority::High);
        list.add("c", Priority::Medium);
        list
    }

    #[test]
    fn test_add_appends_open_item() {
        let mut list = sample();
        let id = list.add("  write report ", Priority::Medium);

        assert_eq!(id, Some(4));
        assert_eq!(list.len(), 4);
        let last = list.items().last().unwrap();
        assert_eq!(last.text, "write report");
        assert_eq!(last.priority, Priority::Medium);
        assert!(!last.completed);
    }

    #[test]
    fn test_add_blank_is_ignored() {
        let mut list = sample();
        let before = list.clone();

        assert_eq!(list.add("", Priority::High), None);
        assert_eq!(list.add("   \t\n", Priority::High), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_only_touches_target() {
        let mut list = sample();

        assert_eq!(list.toggle_completed(2), Some(true));
        let flags: Vec<bool> = list.items().iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false]);

        assert_eq!(list.toggle_completed(2), Some(false));
        assert!(list.items().iter().all(|t| !t.completed));

        assert_eq!(list.toggle_completed(99), None);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = sample();

        let removed = list.remove(2).unwrap();
        assert_eq!(removed.text, "b");
        let ids: Vec<u32> = list.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(list.remove(2).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = sample();
        list.remove(3);
        let id = list.add("d", Priority::Low).unwrap();

        assert_eq!(id, 4);
        let ids: Vec<u32> = list.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_update_text_preserves_other_fields() {
        let mut list = sample();
        list.toggle_completed(2);

        assert!(list.update_text(2, "renamed"));
        let todo = list.get(2).unwrap();
        assert_eq!(todo.text, "renamed");
        assert!(todo.completed);
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(list.get(1).unwrap().text, "a");
        assert_eq!(list.get(3).unwrap().text, "c");
    }

    #[test]
    fn test_update_text_rejects_blank_and_unknown() {
        let mut list = sample();

        assert!(!list.update_text(1, "  "));
        assert_eq!(list.get(1).unwrap().text, "a");
        assert!(!list.update_text(42, "x"));
    }

    #[test]
    fn test_apply_submissions() {
        let mut list = TodoList::new();

        let id = list.apply(Submission::Add {
            text: "first".to_string(),
            priority: Priority::High,
        });
        assert_eq!(id, Some(1));

        let id = list.apply(Submission::Save {
            id: 1,
            text: "first, edited".to_string(),
        });
        assert_eq!(id, Some(1));
        assert_eq!(list.get(1).unwrap().text, "first, edited");

        let id = list.apply(Submission::Save {
            id: 7,
            text: "ghost".to_string(),
        });
        assert_eq!(id, None);
        assert_eq!(list.len(), 1);
    }
}
