//! REST API Wrappers
//!
//! Per-resource list definitions and mutation builders, organized by domain.

pub mod auth;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod suppliers;
pub mod tasks;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use paged_list::{ApiClient, HttpTransport, Sleeper};

/// Client used by every view
pub type Client = ApiClient<HttpTransport>;

/// Debounce timer backed by `setTimeout`
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// `<resource>/<id>` with an optional action suffix
fn item_path(resource: &str, id: u64, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("{}/{}/{}", resource, id, action),
        None => format!("{}/{}", resource, id),
    }
}
