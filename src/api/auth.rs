//! Authentication
//!
//! Token acquisition and persistence. Token validation happens server-side.

use paged_list::ApiError;
use serde::{Deserialize, Serialize};

use super::Client;

const LOGIN_PATH: &str = "auth/login";
const TOKEN_KEY: &str = "stockroom.token";

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// Exchange credentials for a token and store it in the session
pub async fn login(client: &Client, args: &LoginArgs<'_>) -> Result<(), ApiError> {
    let response: LoginResponse = client.post_json(LOGIN_PATH, args).await?;
    save_token(&response.token);
    client.session().sign_in(response.token);
    Ok(())
}

pub fn logout(client: &Client) {
    clear_token();
    client.session().sign_out();
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load_token() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok()?
}

fn save_token(token: &str) {
    if let Some(storage) = storage() {
        if let Err(err) = storage.set_item(TOKEN_KEY, token) {
            tracing::warn!(error = ?err, "could not persist session token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        if let Err(err) = storage.remove_item(TOKEN_KEY) {
            tracing::warn!(error = ?err, "could not clear session token");
        }
    }
}
