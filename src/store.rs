//! To-do State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoId};

/// The whole list, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct TodoState {
    pub todos: Vec<Todo>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of completed entries
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.done).count()
    }

    /// Footer text, e.g. "3 items, 1 done"
    pub fn summary(&self) -> String {
        let noun = if self.len() == 1 { "item" } else { "items" };
        format!("{} {}, {} done", self.len(), noun, self.done_count())
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Read the current list, tracking changes to the `todos` field only
pub fn store_todos(store: &TodoStore) -> Vec<Todo> {
    store.todos().get()
}

/// Look up one entry by id, tracking the `todos` field
pub fn store_find_todo(store: &TodoStore, id: TodoId) -> Option<Todo> {
    store.todos().with(|todos| todos.iter().find(|todo| todo.id == id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_count() {
        let mut done = Todo::new("b");
        done.done = true;
        let state = TodoState {
            todos: vec![Todo::new("a"), done, Todo::new("c")],
        };
        assert_eq!(state.len(), 3);
        assert_eq!(state.done_count(), 1);
        assert!(TodoState::new().is_empty());
        assert_eq!(state.summary(), "3 items, 1 done");
    }

    #[test]
    fn test_summary_singular() {
        let state = TodoState { todos: vec![Todo::new("a")] };
        assert_eq!(state.summary(), "1 item, 0 done");
    }

    #[test]
    fn test_store_find_todo() {
        let owner = Owner::new();
        owner.with(|| {
            let todo = Todo::new("a");
            let id = todo.id;
            let store = Store::new(TodoState { todos: vec![todo] });
            assert_eq!(store_find_todo(&store, id).map(|t| t.title), Some("a".to_string()));
            assert!(store_find_todo(&store, TodoId::new()).is_none());
            assert_eq!(store_todos(&store).len(), 1);
        });
    }
}
