//! Application Context
//!
//! Store and configuration provided via Leptos Context API.

use leptos::prelude::*;
use log::debug;

use crate::actions::TodoAction;
use crate::config::UiConfig;
use crate::reducer;
use crate::store::TodoStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// The to-do list
    pub store: TodoStore,
    /// Display configuration
    pub config: StoredValue<UiConfig>,
}

impl TodoContext {
    pub fn new(store: TodoStore, config: UiConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Replace the list with the result of applying `action`
    pub fn dispatch(&self, action: TodoAction) {
        debug!("dispatch {}", action.name());
        self.store.update(|state| *state = reducer::apply(state, &action));
    }
}

/// Get the context provided by `App`
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TodoState;
    use reactive_stores::Store;

    fn make_context() -> TodoContext {
        TodoContext::new(Store::new(TodoState::new()), UiConfig::default())
    }

    #[test]
    fn test_dispatch_updates_store() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = make_context();
            ctx.dispatch(TodoAction::Add("Buy milk".to_string()));
            ctx.dispatch(TodoAction::Add("Buy bread".to_string()));

            let state = ctx.store.get_untracked();
            assert_eq!(state.len(), 2);
            assert_eq!(state.todos[1].title, "Buy bread");

            let id = state.todos[0].id;
            ctx.dispatch(TodoAction::Toggle(id));
            assert_eq!(ctx.store.get_untracked().done_count(), 1);
        });
    }
}
