//! Error types for Alerta Temprana.
//!
//! This module defines [`AlertaError`]. The alert engine itself never fails:
//! unknown categories fall back to a generic description and removing a
//! missing alert reports "not found" through its return value. The variants
//! here cover the edges of the system, where configuration, log files, the
//! terminal and the map widget bridge can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`AlertaError`].
pub type Result<T> = std::result::Result<T, AlertaError>;

/// Error type for Alerta Temprana operations.
#[derive(Debug, Error)]
pub enum AlertaError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration file not found
    #[error("Configuration not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file is invalid YAML
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Generic I/O error with context
    #[error("I/O error {operation}: {path}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Parsing Errors
    // =========================================================================
    /// JSON parsing error (map bridge messages)
    #[error("JSON parse error in {context}: {message}")]
    JsonParse {
        context: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// YAML parsing or serialization error
    #[error("YAML error in {context}: {message}")]
    YamlParse { context: String, message: String },

    // =========================================================================
    // TUI Errors
    // =========================================================================
    /// Terminal initialization failed
    #[error("Terminal initialization failed: {message}")]
    TerminalInit { message: String },

    /// Terminal restore failed
    #[error("Failed to restore terminal: {message}")]
    TerminalRestore { message: String },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error (bug in Alerta)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AlertaError {
    /// Create a ConfigNotFound error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a ConfigNotFound error with source
    pub fn config_not_found_with_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a ConfigValidation error
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a JSON parse error
    pub fn json_parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonParse {
            context: context.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a YAML error
    pub fn yaml(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::YamlParse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is fatal (should exit application)
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::TerminalInit { .. } | Self::Internal { .. })
    }

    /// Returns true if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigInvalid { .. } | Self::ConfigValidation { .. }
        )
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => {
                Some("Check the --config path, or omit it to use ~/.alerta/config.yaml")
            }
            Self::ConfigInvalid { .. } => {
                Some("Check YAML syntax - run 'alerta --print-config' for a valid example")
            }
            Self::ConfigValidation { .. } => {
                Some("Map center must be finite and latitude/longitude deltas must be positive")
            }
            Self::DirectoryCreation { .. } => Some("Pass a writable directory with --log-dir"),
            Self::TerminalInit { .. } => Some("Try running in a different terminal"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_error() {
        let err = AlertaError::config_not_found("/home/user/.alerta/config.yaml");
        assert!(err.to_string().contains("Configuration not found"));
        assert!(err.is_config_error());
        assert!(!err.is_fatal());
        assert!(err.guidance().is_some());
    }

    #[test]
    fn test_json_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AlertaError::json_parse("map message", source);
        assert!(err.to_string().contains("map message"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_error_classification() {
        assert!(AlertaError::internal("bug").is_fatal());
        assert!(AlertaError::TerminalInit { message: "no tty".into() }.is_fatal());
        assert!(!AlertaError::config_validation("bad delta").is_fatal());
    }

    #[test]
    fn test_error_guidance() {
        let err = AlertaError::TerminalInit { message: "no tty".into() };
        assert_eq!(err.guidance(), Some("Try running in a different terminal"));
        assert_eq!(AlertaError::internal("bug").guidance(), None);
    }
}
