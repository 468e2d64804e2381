//! New Todo Form Component
//!
//! Text input plus "Add" button. Blank titles are ignored here; the reducer
//! accepts anything.

use leptos::prelude::*;

use crate::actions::TodoAction;
use crate::context::use_todo_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let (new_title, set_new_title) = signal(String::new());
    let placeholder = ctx.config.with_value(|config| config.placeholder.clone());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        if is_blank(&title) {
            return;
        }
        ctx.dispatch(TodoAction::Add(title));
        set_new_title.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
