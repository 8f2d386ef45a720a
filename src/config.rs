//! App Configuration
//!
//! Baked in at build time from `STOCKROOM_*` environment variables.

use paged_list::ClientConfig;

pub fn load() -> ClientConfig {
    from_vars(
        option_env!("STOCKROOM_API_URL"),
        option_env!("STOCKROOM_DEBOUNCE_MS"),
        option_env!("STOCKROOM_PAGE_SIZE"),
    )
}

/// Unparseable values fall back to the defaults
fn from_vars(api_url: Option<&str>, debounce_ms: Option<&str>, page_size: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(url) = api_url.filter(|u| !u.is_empty()) {
        config.api_base_url = url.to_string();
    }
    if let Some(ms) = debounce_ms.and_then(|v| v.parse().ok()) {
        config.debounce_ms = ms;
    }
    if let Some(size) = page_size.and_then(|v| v.parse().ok()) {
        config.page_size = size;
    }
    config
}
