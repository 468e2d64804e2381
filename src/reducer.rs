//! List State Reducer
//!
//! Pure transition from one `TodoState` to the next.

use crate::actions::TodoAction;
use crate::models::{Todo, TodoId};
use crate::store::TodoState;

/// Apply `action` to `state` and return the resulting state.
///
/// `state` is never modified. Toggle, Delete and Edit on an id that is not
/// present return an equal state. `TodoAction` is a closed enum, so an
/// unrecognized command cannot be constructed and the match has no fallback.
pub fn apply(state: &TodoState, action: &TodoAction) -> TodoState {
    match action {
        TodoAction::Add(title) => {
            let mut todos = Vec::with_capacity(state.todos.len() + 1);
            todos.extend(state.todos.iter().cloned());
            todos.push(Todo::new(title.as_str()));
            TodoState { todos }
        }
        TodoAction::Toggle(id) => replace_matching(state, *id, Todo::toggled),
        TodoAction::Delete(id) => TodoState {
            todos: state
                .todos
                .iter()
                .filter(|todo| todo.id != *id)
                .cloned()
                .collect(),
        },
        TodoAction::Edit { id, title } => replace_matching(state, *id, |todo| todo.retitled(title)),
    }
}

// In-place replacement keeps the position of the matching entry.
fn replace_matching(state: &TodoState, id: TodoId, replace: impl Fn(&Todo) -> Todo) -> TodoState {
    TodoState {
        todos: state
            .todos
            .iter()
            .map(|todo| if todo.id == id { replace(todo) } else { todo.clone() })
            .collect(),
    }
}
