//! Search Input Component
//!
//! Free-text filter input. Debouncing happens in the list controller, so
//! every keystroke is forwarded as-is.

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-input"
            autocomplete="off"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    on_input.run(String::new());
                }
            }
        />
    }
}
