//! Todo List Component
//!
//! Renders every entry in insertion order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_todo_context;
use crate::store::{store_todos, TodoState};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();

    view! {
        <div class="todo-list">
            <Show when=move || ctx.store.with(TodoState::is_empty)>
                <p class="empty-hint">"Nothing to do"</p>
            </Show>

            // Keyed by id only, so a row keeps its edit state while others change
            <For
                each=move || store_todos(&ctx.store)
                key=|todo| todo.id
                children=move |todo| view! { <TodoRow id=todo.id /> }
            />
        </div>
    }
}
