//! UI Components
//!
//! Reusable Leptos components.

mod checkbox;
mod new_todo_form;
mod todo_list;
mod todo_row;

pub use checkbox::Checkbox;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
