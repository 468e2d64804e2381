//! Checkbox Component
//!
//! Checkbox that reports the new checked value.

use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="checkbox"
            prop:checked=move || checked.get()
            on:change=move |ev| on_change.run(event_target_checked(&ev))
        />
    }
}
