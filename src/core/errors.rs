/*!
 * Error Types
 * Configuration errors with thiserror, miette, and serde support
 *
 * The simulation itself never fails: capacity and gating outcomes are plain
 * booleans. Only loading a stage configuration can go wrong.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration operation result
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Stage configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value for `{field}`: {reason}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Check the stage configuration against the documented bounds.")
    )]
    InvalidValue { field: String, reason: String },

    #[error("Failed to parse stage configuration: {0}")]
    #[diagnostic(
        code(config::parse_failed),
        help("The configuration must be a JSON object with snake_case keys.")
    )]
    ParseFailed(String),

    #[error("Failed to read stage configuration from {path}: {reason}")]
    #[diagnostic(code(config::read_failed))]
    ReadFailed { path: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}
