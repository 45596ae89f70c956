//! Filter Utilities
//!
//! Read-only views over the list for rendering.

use crate::models::{PriorityFilter, Todo};

/// Items matching `filter`, in list order
pub fn filter_by_priority(items: &[Todo], filter: PriorityFilter) -> Vec<Todo> {
    items
        .iter()
        .filter(|todo| filter.matches(todo.priority))
        .cloned()
        .collect()
}

/// Number of items matching `filter`
pub fn count_by(items: &[Todo], filter: PriorityFilter) -> usize {
    items.iter().filter(|todo| filter.matches(todo.priority)).count()
}

pub fn count_completed(items: &[Todo]) -> usize {
    items.iter().filter(|todo| todo.completed).count()
}
