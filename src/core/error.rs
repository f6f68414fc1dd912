//! Typed error handling for paydash
//!
//! # Error Categories
//!
//! - [`ValidationError`]: caller misuse, such as a zero page size
//! - [`ConfigError`]: configuration that cannot be parsed or is inconsistent
//!
//! Empty pages and empty collections are not errors; they are regular
//! [`Page`](crate::core::Page) results.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_page(0, 0).await {
//!     Ok(page) => println!("{} records", page.data.len()),
//!     Err(DashError::Validation(ValidationError::InvalidArgument { argument, .. })) => {
//!         eprintln!("bad argument: {}", argument);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for paydash
#[derive(Debug)]
pub enum DashError {
    /// Invalid input from the caller
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Validation(e) => write!(f, "{}", e),
            DashError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Validation(e) => Some(e),
            DashError::Config(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DashError {
    /// Shorthand for a [`ValidationError::InvalidArgument`]
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        DashError::Validation(ValidationError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashError::Validation(_) => StatusCode::BAD_REQUEST,
            DashError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashError::Validation(e) => e.error_code(),
            DashError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DashError::Validation(ValidationError::InvalidArgument { argument, .. }) => {
                Some(serde_json::json!({ "argument": argument }))
            }
            DashError::Config(ConfigError::InvalidValue { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            DashError::Config(ConfigError::ParseError { file, .. }) => {
                file.as_ref().map(|file| serde_json::json!({ "file": file }))
            }
        }
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when a caller passes unusable input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An argument is outside its accepted domain
    InvalidArgument { argument: String, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidArgument { argument, message } => {
                write!(f, "Invalid argument '{}': {}", argument, message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}

impl From<ValidationError> for DashError {
    fn from(err: ValidationError) -> Self {
        DashError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// A field holds a value that cannot be used
    InvalidValue { field: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => match file {
                Some(file) => write!(f, "Failed to parse config '{}': {}", file, message),
                None => write!(f, "Failed to parse config: {}", message),
            },
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for DashError {
    fn from(err: ConfigError) -> Self {
        DashError::Config(err)
    }
}
