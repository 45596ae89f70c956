//! UI Components
//!
//! Leptos components for the to-do list.

mod new_todo_form;
mod priority_selector;
mod filter_selector;
mod todo_item;
mod todo_list_view;
mod bottom_nav;

pub use new_todo_form::NewTodoForm;
pub use priority_selector::PrioritySelector;
pub use filter_selector::FilterSelector;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
pub use bottom_nav::BottomNav;
