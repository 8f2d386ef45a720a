//! API Errors
//!
//! Classification of failed requests and where each kind is shown.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Field name -> validation message
pub type FieldErrors = BTreeMap<String, String>;

pub const RETRY_MESSAGE: &str = "Could not reach the server. Please try again.";
pub const NOT_FOUND_MESSAGE: &str = "The record no longer exists.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Field-level constraint violations
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Domain rule rejection (`{code, description}` body)
    #[error("{code}: {description}")]
    Business {
        status: u16,
        code: String,
        description: String,
    },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("session expired")]
    Unauthorized,

    /// Request never reached the server, or the response could not be read
    #[error("transport error: {0}")]
    Transport(String),
}

/// Where an error is shown
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSurface {
    /// Single message above the list
    Banner(String),
    /// Messages next to form fields
    Inline(FieldErrors),
}

impl ApiError {
    /// Classify a non-2xx response by its status and body shape
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            let code = map.get("code").and_then(Value::as_str);
            let description = map.get("description").and_then(Value::as_str);
            if let (Some(code), Some(description)) = (code, description) {
                if status == 404 {
                    return ApiError::NotFound {
                        message: description.to_string(),
                    };
                }
                return ApiError::Business {
                    status,
                    code: code.to_string(),
                    description: description.to_string(),
                };
            }

            let fields: Option<FieldErrors> = map
                .iter()
                .map(|(k, v)| v.as_str().map(|msg| (k.clone(), msg.to_string())))
                .collect();
            if let Some(fields) = fields.filter(|f| !f.is_empty()) {
                return ApiError::Validation(fields);
            }
        }

        if status == 404 {
            return ApiError::NotFound {
                message: NOT_FOUND_MESSAGE.to_string(),
            };
        }
        ApiError::Transport(format!("unexpected response (HTTP {})", status))
    }

    pub fn surface(&self) -> ErrorSurface {
        match self {
            ApiError::Validation(fields) => ErrorSurface::Inline(fields.clone()),
            ApiError::Business { description, .. } => ErrorSurface::Banner(description.clone()),
            ApiError::NotFound { message } => ErrorSurface::Banner(message.clone()),
            ApiError::Unauthorized => ErrorSurface::Banner(SESSION_EXPIRED_MESSAGE.to_string()),
            ApiError::Transport(_) => ErrorSurface::Banner(RETRY_MESSAGE.to_string()),
        }
    }

    /// Not-found means the visible row is stale; the list must be refreshed
    pub fn needs_refetch(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("malformed response: {}", err))
    }
}
