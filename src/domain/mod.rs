// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the document tree, dot-paths, errors, and the typed accessor
//! trait. It does not depend on any parser or on the filesystem.

pub mod config_node;
pub mod dot_path;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use config_node::{ConfigNode, Mapping, NodeKind, ScalarValue};
pub use dot_path::DotPath;
pub use errors::{ConfigError, Result};
pub use service::ConfigReader;
