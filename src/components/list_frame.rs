//! List Frame Component

use leptos::prelude::*;

/// Wraps a table; shows a spinner overlay on this view only while loading
#[component]
pub fn ListFrame(#[prop(into)] loading: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="list-frame" class:loading=move || loading.get()>
            {children()}
            <Show when=move || loading.get()>
                <div class="spinner-overlay">
                    <div class="spinner"></div>
                </div>
            </Show>
        </div>
    }
}
