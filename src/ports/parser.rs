// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which turns the raw bytes of a
//! configuration file into a generic `ConfigNode` tree.

use crate::domain::{ConfigNode, Result};

/// A trait for parsing configuration documents.
///
/// Parsers own all syntax concerns (indentation, anchors, scalar typing). The rest
/// of the crate only inspects the resulting tree, so the scalar kind a parser picks
/// is final: a value parsed as a string is never treated as an integer later.
///
/// # Examples
///
/// ```rust
/// use dots::domain::{ConfigNode, Result};
/// use dots::ports::DocumentParser;
///
/// struct KeyValueParser;
///
/// impl DocumentParser for KeyValueParser {
///     fn parse(&self, content: &[u8]) -> Result<ConfigNode> {
///         let text = String::from_utf8_lossy(content);
///         Ok(ConfigNode::mapping(text.lines().filter_map(|line| {
///             line.split_once('=')
///                 .map(|(k, v)| (k.trim().to_string(), ConfigNode::from(v.trim())))
///         })))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let root = KeyValueParser.parse(b"host = localhost").unwrap();
/// assert_eq!(root.get("host").and_then(ConfigNode::as_str), Some("localhost"));
/// ```
pub trait DocumentParser {
    /// Parses raw document content into a tree.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigNode)` - The document root
    /// * `Err(ConfigError::ParseError)` - The content is not a valid document
    fn parse(&self, content: &[u8]) -> Result<ConfigNode>;

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];
}
