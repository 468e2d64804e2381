//! Todo List App
//!
//! Root component: heading, new-item form, list and counts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoList};
use crate::config::UiConfig;
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let heading = config.heading.clone();

    // State lives for the session only
    let store = Store::new(TodoState::new());
    provide_context(TodoContext::new(store, config));

    view! {
        <div class="app-layout">
            <h2>{heading}</h2>

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{move || store.with(TodoState::summary)}</p>
        </div>
    }
}
