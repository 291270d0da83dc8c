// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser, filesystem and command-line implementations.
//!
//! This module contains the concrete implementations of the ports layer, plus the
//! filesystem helpers used when loading documents.

#[cfg(feature = "cli")]
pub mod cli;
pub mod file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
pub use file::{default_config_path, read_document, MAX_DOCUMENT_SIZE};
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;
