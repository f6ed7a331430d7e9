//! Error types for the z/OSMF SDK
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the z/OSMF SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Missing required config field: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid format for '{field}': {message}")]
    InvalidFormat { field: String, message: String },

    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode config file '{path}': {source}")]
    InvalidConfigFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration not found: {message}")]
    NotFound { message: String },

    #[error(
        "Could not load configuration from environment variables ({env}) or config files ({files})"
    )]
    ConfigurationUnavailable { env: Box<Error>, files: Box<Error> },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an IO error bound to the path that failed
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create a config file decode error
    pub fn invalid_config_file(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidConfigFile {
            path: path.into(),
            source,
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// True when the configuration could not be resolved
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredField { .. }
                | Error::InvalidFormat { .. }
                | Error::Io { .. }
                | Error::InvalidConfigFile { .. }
                | Error::NotFound { .. }
                | Error::ConfigurationUnavailable { .. }
        )
    }

    /// True when the server could not be reached
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Status code the server rejected the operation with, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the z/OSMF SDK
pub type Result<T> = std::result::Result<T, Error>;
