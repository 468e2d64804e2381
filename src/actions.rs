//! To-do Actions
//!
//! Commands accepted by the reducer.

use crate::models::TodoId;

/// A mutation applied to the to-do list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new entry with this title
    Add(String),
    /// Flip `done` on the matching entry
    Toggle(TodoId),
    /// Remove the matching entry
    Delete(TodoId),
    /// Replace the title of the matching entry
    Edit { id: TodoId, title: String },
}

impl TodoAction {
    /// Name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            TodoAction::Add(_) => "ADD_TODO",
            TodoAction::Toggle(_) => "TOGGLE_DONE",
            TodoAction::Delete(_) => "DELETE_TODO",
            TodoAction::Edit { .. } => "EDIT_TODO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let id = TodoId::new();
        assert_eq!(TodoAction::Add(String::new()).name(), "ADD_TODO");
        assert_eq!(TodoAction::Toggle(id).name(), "TOGGLE_DONE");
        assert_eq!(TodoAction::Delete(id).name(), "DELETE_TODO");
        assert_eq!(TodoAction::Edit { id, title: String::new() }.name(), "EDIT_TODO");
    }
}
