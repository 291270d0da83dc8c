// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the dots crate.
//!
//! This module defines the errors that can occur while loading a configuration
//! document or resolving a dot-path inside it. All errors use `thiserror`.

use crate::domain::config_node::NodeKind;
use thiserror::Error;

/// The main error type for document loading and path resolution.
///
/// Load failures (`ReadError`, `ParseError`) mean no document exists. Resolution
/// failures (`KeyNotFound`, `TypeMismatch`, `Extraction`) are local to a single
/// accessor call and never affect the document or its caches.
///
/// # Examples
///
/// ```
/// use dots::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "database.host".to_string(),
///         segment: "host".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().is_key_not_found());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document file could not be read.
    #[error("Failed to read configuration file '{path}': {message}")]
    ReadError {
        /// The path that was being read
        path: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The document content is not valid for the parser.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A path segment does not exist at the expected level.
    #[error("Key '{key}' not found: no entry for segment '{segment}'")]
    KeyNotFound {
        /// The full dot-path being resolved
        key: String,
        /// The segment that was absent
        segment: String,
    },

    /// A node along the path, or the resolved leaf, has the wrong kind.
    #[error("Type mismatch for key '{key}' at segment '{segment}': expected {expected}, found {actual}")]
    TypeMismatch {
        /// The full dot-path being resolved
        key: String,
        /// The segment whose value had the wrong kind
        segment: String,
        /// The kind that was required
        expected: NodeKind,
        /// The kind that was found
        actual: NodeKind,
    },

    /// Resolution failed while a typed accessor was extracting a value.
    #[error("Unable to extract {target_type} value for key '{key}': {source}")]
    Extraction {
        /// The full dot-path being resolved
        key: String,
        /// The requested type name
        target_type: &'static str,
        /// The resolution error
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Wraps a resolution error raised while extracting a typed value.
    pub fn extraction(key: &str, target_type: &'static str, source: ConfigError) -> Self {
        ConfigError::Extraction {
            key: key.to_string(),
            target_type,
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, looking through `Extraction` wrappers.
    pub fn root_cause(&self) -> &ConfigError {
        match self {
            ConfigError::Extraction { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns `true` if a path segment could not be found.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self.root_cause(), ConfigError::KeyNotFound { .. })
    }

    /// Returns `true` if a node along the path had the wrong kind.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.root_cause(), ConfigError::TypeMismatch { .. })
    }

    /// Returns `true` if the document could not be read.
    pub fn is_read_error(&self) -> bool {
        matches!(self.root_cause(), ConfigError::ReadError { .. })
    }

    /// Returns `true` if the document could not be parsed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self.root_cause(), ConfigError::ParseError { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
