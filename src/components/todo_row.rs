//! Todo Row Component
//!
//! One entry: checkbox, title or inline editor, Edit/Save and Delete.

use leptos::prelude::*;

use crate::actions::TodoAction;
use crate::components::Checkbox;
use crate::context::use_todo_context;
use crate::models::TodoId;
use crate::store::store_find_todo;

/// A single row, reading its entry from the store by id
#[component]
pub fn TodoRow(id: TodoId) -> impl IntoView {
    let ctx = use_todo_context();

    // Edit mode is local to the row
    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());

    let todo = Memo::new(move |_| store_find_todo(&ctx.store, id));
    let done = Signal::derive(move || todo.get().map(|t| t.done).unwrap_or(false));
    let title = move || todo.get().map(|t| t.title).unwrap_or_default();

    let start_edit = move |_| {
        set_edit_title.set(title());
        set_editing.set(true);
    };
    let save_edit = move |_| {
        ctx.dispatch(TodoAction::Edit { id, title: edit_title.get_untracked() });
        set_editing.set(false);
    };

    view! {
        <div class=move || if done.get() { "todo-row done" } else { "todo-row" }>
            <Checkbox
                checked=done
                on_change=move |_: bool| ctx.dispatch(TodoAction::Toggle(id))
            />

            <Show
                when=move || editing.get()
                fallback=move || view! { <span class="todo-title">{title}</span> }
            >
                <input
                    type="text"
                    class="todo-edit-input"
                    prop:value=move || edit_title.get()
                    on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                />
            </Show>

            <Show
                when=move || editing.get()
                fallback=move || view! { <button class="edit-btn" on:click=start_edit>"Edit"</button> }
            >
                <button class="save-btn" on:click=save_edit>"Save"</button>
            </Show>

            <button class="delete-btn" on:click=move |_| ctx.dispatch(TodoAction::Delete(id))>
                "Delete"
            </button>
        </div>
    }
}
