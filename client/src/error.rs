//! Error handling for the marketplace client
//!
//! One taxonomy covers local validation, transport failures, server-side
//! errors (whose bodies arrive in three different conventions), and
//! auth/session failures. Server field errors parse into the same
//! `ValidationErrors` map local validation produces so both render through
//! one mechanism.

use serde_json::Value;
use shared::ValidationErrors;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ApiError {
    // Local validation, detected before any network call
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    // Transport errors
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Non-success responses from the backend
    #[error("Server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        field_errors: ValidationErrors,
    },

    // Auth and session errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Session expired")]
    TokenExpired,

    #[error("No refresh token available")]
    MissingRefreshToken,

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ApiError {
    /// Field-level errors to highlight inline, whether they came from local
    /// validation or from the server response body.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            ApiError::Server { field_errors, .. } if !field_errors.is_empty() => {
                Some(field_errors)
            }
            _ => None,
        }
    }

    /// Best available human-readable message for a modal alert
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Parse a non-success response body into a `Server` error.
///
/// Supports the three conventions the backend is known to use: a bare
/// string, an object with a `message`/`error`/`detail` field, or a
/// per-field error map (values either strings or arrays of strings).
pub(crate) fn parse_error_body(status: u16, body: &str) -> ApiError {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value {
            Value::String(message) => {
                return server_error(status, message, ValidationErrors::new());
            }
            Value::Object(map) => {
                for key in ["message", "error", "detail"] {
                    if let Some(Value::String(message)) = map.get(key) {
                        return server_error(status, message.clone(), ValidationErrors::new());
                    }
                }

                let mut fields = ValidationErrors::new();
                for (field, value) in &map {
                    match value {
                        Value::String(message) => fields.insert(field, message.clone()),
                        Value::Array(items) => {
                            if let Some(Value::String(message)) = items.first() {
                                fields.insert(field, message.clone());
                            }
                        }
                        _ => {}
                    }
                }
                if !fields.is_empty() {
                    return server_error(status, "Validation failed".to_string(), fields);
                }
            }
            _ => {}
        }
    }

    let message = if body.trim().is_empty() {
        format!("Request failed with status {}", status)
    } else {
        let mut text = body.trim().to_string();
        if text.len() > 200 {
            text.truncate(200);
        }
        text
    };
    server_error(status, message, ValidationErrors::new())
}

fn server_error(status: u16, message: String, field_errors: ValidationErrors) -> ApiError {
    ApiError::Server {
        status,
        message,
        field_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_string_body() {
        let err = parse_error_body(400, "\"Listing rejected\"");
        match err {
            ApiError::Server {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Listing rejected");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parses_message_field_conventions() {
        for key in ["message", "error", "detail"] {
            let body = format!("{{\"{key}\": \"Something broke\"}}");
            let err = parse_error_body(500, &body);
            match err {
                ApiError::Server { message, .. } => assert_eq!(message, "Something broke"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn parses_field_error_map() {
        let body = r#"{"address": ["Address is required"], "price": "Too low"}"#;
        let err = parse_error_body(422, body);
        let fields = err.validation_errors().expect("field errors");
        assert_eq!(fields.get("address"), Some("Address is required"));
        assert_eq!(fields.get("price"), Some("Too low"));
    }

    #[test]
    fn falls_back_to_status_message() {
        let err = parse_error_body(503, "");
        match err {
            ApiError::Server { message, .. } => {
                assert_eq!(message, "Request failed with status 503");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
