// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-path access to nested YAML configuration.
//!
//! This crate loads a structured document once and reads values out of it with
//! period-delimited paths such as `"database.primary.host"`. Values are extracted
//! with a strict type check (string, integer or boolean) and memoized per document.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigNode`, `DotPath`, `ConfigError`) and the
//!   `ConfigReader` accessor trait
//! - **Ports**: The `DocumentParser` trait that turns bytes into a tree
//! - **Adapters**: The YAML parser, filesystem helpers and the command-line front end
//! - **Service**: The path resolver, typed caches and `ConfigDocument`
//!
//! # Calling conventions
//!
//! Single-key accessors (`get_string`, `get_int`, `get_bool`) return a `Result`
//! and never substitute defaults. Batch accessors (`get_strings`, `get_ints`,
//! `get_bools`) are best-effort: a failing path yields `""`, `0` or `false`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser and file loading helpers (default)
//! - `cli`: Enable the `dots` command-line binary (default)
//!
//! # Quick Start
//!
//! ```rust
//! use dots::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let doc = ConfigDocument::from_yaml_str(
//!     "x:\n  b:\n    c:\n      d: hello\n      e: 100\n",
//! )?;
//!
//! assert_eq!(doc.get_string("x.b.c.d")?, "hello");
//! assert_eq!(doc.get_int("x.b.c.e")?, 100);
//! assert!(doc.get_int("x.b.zzz.d").is_err());
//! assert_eq!(doc.get_strings(&["x.b.c.d", "nope"]), vec!["hello", ""]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigNode, ConfigReader, DotPath, NodeKind, Result, ScalarValue,
    };
    pub use crate::ports::DocumentParser;
    pub use crate::service::{ConfigDocument, resolve};

    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
