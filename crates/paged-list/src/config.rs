//! Client Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Accepted debounce window in milliseconds, inclusive
const DEBOUNCE_RANGE_MS: (u64, u64) = (300, 500);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_base_url: String,
    pub debounce_ms: u64,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(
            self.debounce_ms
                .clamp(DEBOUNCE_RANGE_MS.0, DEBOUNCE_RANGE_MS.1),
        )
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.max(1)
    }

    /// Absolute URL for a resource path such as `tasks/7`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ClientConfig::from_json(r#"{"apiBaseUrl":"https://erp.example.com/api/"}"#).unwrap();
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.endpoint("/tasks/7"), "https://erp.example.com/api/tasks/7");
    }

    #[test]
    fn test_debounce_is_clamped() {
        let mut config = ClientConfig::default();
        config.debounce_ms = 50;
        assert_eq!(config.debounce(), Duration::from_millis(300));
        config.debounce_ms = 2_000;
        assert_eq!(config.debounce(), Duration::from_millis(500));
        config.debounce_ms = 350;
        assert_eq!(config.debounce(), Duration::from_millis(350));
    }

    #[test]
    fn test_zero_page_size_is_raised() {
        let config = ClientConfig::from_json(r#"{"pageSize":0}"#).unwrap();
        assert_eq!(config.page_size(), 1);
    }
}
