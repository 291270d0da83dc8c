// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits that adapters implement. The only port is the
//! document parser, which turns raw bytes into a `ConfigNode` tree.

pub mod parser;

// Re-export commonly used types
pub use parser::DocumentParser;
