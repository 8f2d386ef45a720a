//! Error Banner Component

use leptos::prelude::*;

/// Single dismissable message above a list; stale rows stay visible below it
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{text}</span>
                    <button class="dismiss-btn" on:click=move |_| on_dismiss.run(())>"×"</button>
                </div>
            }
        })
    }
}

/// Inline message under a form field
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|text| view! { <span class="field-error">{text}</span> })
    }
}
