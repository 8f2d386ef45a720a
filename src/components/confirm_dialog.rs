//! Confirm Dialog Component
//!
//! Modal shown while a destructive action waits on the user.

use leptos::prelude::*;

/// Confirmation modal
///
/// Visible while `prompt` is `Some`. Nothing is sent until ✓ is clicked.
///
/// # Arguments
/// * `prompt` - Question to show, `None` when no action is pending
/// * `on_confirm` - Send the pending action
/// * `on_cancel` - Discard the pending action
#[component]
pub fn ConfirmDialog(
    #[prop(into)] prompt: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || prompt.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal confirm-dialog" on:click=|ev| ev.stop_propagation()>
                    <p class="confirm-text">{move || prompt.get().unwrap_or_default()}</p>
                    <div class="confirm-actions">
                        <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                            "✓ Confirm"
                        </button>
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "✗ Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Row-level delete button; only asks, never deletes by itself
#[component]
pub fn DeleteButton(
    #[prop(into)] on_request: Callback<()>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="delete-btn"
            title="Delete"
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_request.run(());
            }
        >
            "×"
        </button>
    }
}
