//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;
use paged_list::{ApiError, ErrorSurface};

use crate::api::auth::{self, LoginArgs};
use crate::context::use_app_context;
use crate::store::{store_signed_in, use_app_store, AppStateStoreFields};

const BAD_CREDENTIALS: &str = "Wrong username or password.";

fn login_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => BAD_CREDENTIALS.to_string(),
        other => match other.surface() {
            ErrorSurface::Banner(text) => text,
            ErrorSurface::Inline(fields) => fields.into_values().collect::<Vec<_>>().join(" "),
        },
    }
}

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Enter your username and password.".to_string()));
            return;
        }

        set_pending.set(true);
        set_error.set(None);
        let client = ctx.client();
        spawn_local(async move {
            let args = LoginArgs { username: user.trim(), password: &pass };
            match auth::login(&client, &args).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[LOGIN] Signed in as {}", user.trim()).into());
                    set_password.set(String::new());
                    store_signed_in(&store);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[LOGIN] Failed: {}", err).into());
                    set_error.set(Some(login_message(&err)));
                }
            }
            set_pending.set(false);
        });
    };

    let notice = move || store.notice().get();

    view! {
        <div class="login-screen">
            <form class="login-form" on:submit=on_submit>
                <h1>"Stockroom"</h1>
                {move || notice().map(|text| view! { <p class="login-notice">{text}</p> })}
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                {move || error.get().map(|text| view! { <p class="field-error">{text}</p> })}
                <button type="submit" class="login-btn" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_401_is_bad_credentials() {
        assert_eq!(login_message(&ApiError::Unauthorized), BAD_CREDENTIALS);
        assert_eq!(
            login_message(&ApiError::Transport("offline".into())),
            paged_list::RETRY_MESSAGE
        );
    }
}
