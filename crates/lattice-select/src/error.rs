//! Error types for the select widgets.
//!
//! The state machine itself never fails: invalid targets and empty filter
//! results are absorbed where they occur. Errors only arise when loading
//! configuration or option declarations.

/// Result type alias for select operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors that can occur while configuring a select widget.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// TOML declaration could not be parsed.
    #[error("Failed to parse TOML declaration: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// JSON declaration could not be parsed.
    #[error("Failed to parse JSON declaration: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// A configuration field holds an unusable value.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

impl SelectError {
    /// Create a configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
