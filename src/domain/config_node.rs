// SPDX-License-Identifier: MIT OR Apache-2.0

//! The generic document tree produced by parsers.
//!
//! A parsed document is a tree of `ConfigNode`s. Every node is either a scalar,
//! a mapping with string keys, or an ordered sequence. Parsers decide the scalar
//! kind; nothing in this crate coerces one scalar kind into another.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A mapping node's entries.
pub type Mapping = BTreeMap<String, ConfigNode>;

/// The kind of a node, used for type checks and error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An explicit null or empty value
    Null,
    /// A boolean scalar
    Bool,
    /// An integer scalar
    Integer,
    /// A floating-point scalar
    Float,
    /// A string scalar
    String,
    /// A nested mapping
    Mapping,
    /// A sequence of nodes
    Sequence,
}

impl NodeKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "boolean",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::String => "string",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar leaf value, typed by the parser.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// An explicit null or empty value
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A floating-point number
    Float(f64),
    /// A string
    String(String),
}

impl ScalarValue {
    /// Returns the kind of this scalar.
    pub fn kind(&self) -> NodeKind {
        match self {
            ScalarValue::Null => NodeKind::Null,
            ScalarValue::Bool(_) => NodeKind::Bool,
            ScalarValue::Integer(_) => NodeKind::Integer,
            ScalarValue::Float(_) => NodeKind::Float,
            ScalarValue::String(_) => NodeKind::String,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Float(x) => write!(f, "{}", x),
            ScalarValue::String(s) => f.write_str(s),
        }
    }
}

/// A node in a parsed configuration document.
///
/// The tree is immutable once a document has been loaded.
///
/// # Examples
///
/// ```
/// use dots::domain::{ConfigNode, NodeKind};
///
/// let node = ConfigNode::mapping([
///     ("host", ConfigNode::from("localhost")),
///     ("port", ConfigNode::from(5000)),
/// ]);
///
/// assert_eq!(node.kind(), NodeKind::Mapping);
/// assert_eq!(node.get("port").and_then(ConfigNode::as_i64), Some(5000));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    /// A scalar leaf
    Scalar(ScalarValue),
    /// A mapping from string keys to nodes
    Mapping(Mapping),
    /// An ordered list of nodes
    Sequence(Vec<ConfigNode>),
}

impl ConfigNode {
    /// Builds a mapping node from key/node pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigNode)>,
    {
        ConfigNode::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns an empty mapping node.
    pub fn empty_mapping() -> Self {
        ConfigNode::Mapping(Mapping::new())
    }

    /// Returns the null scalar.
    pub fn null() -> Self {
        ConfigNode::Scalar(ScalarValue::Null)
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            ConfigNode::Scalar(scalar) => scalar.kind(),
            ConfigNode::Mapping(_) => NodeKind::Mapping,
            ConfigNode::Sequence(_) => NodeKind::Sequence,
        }
    }

    /// Returns the entries if this node is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the items if this node is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigNode]> {
        match self {
            ConfigNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the scalar if this node is one.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            ConfigNode::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the string if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(ScalarValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this node is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigNode::Scalar(ScalarValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean if this node is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigNode::Scalar(ScalarValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the float if this node is a float scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigNode::Scalar(ScalarValue::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// Returns `true` if this node is a mapping.
    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigNode::Mapping(_))
    }

    /// Looks up a direct child by key. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl From<ScalarValue> for ConfigNode {
    fn from(scalar: ScalarValue) -> Self {
        ConfigNode::Scalar(scalar)
    }
}

impl From<&str> for ConfigNode {
    fn from(s: &str) -> Self {
        ConfigNode::Scalar(ScalarValue::String(s.to_string()))
    }
}

impl From<String> for ConfigNode {
    fn from(s: String) -> Self {
        ConfigNode::Scalar(ScalarValue::String(s))
    }
}

impl From<i64> for ConfigNode {
    fn from(i: i64) -> Self {
        ConfigNode::Scalar(ScalarValue::Integer(i))
    }
}

impl From<bool> for ConfigNode {
    fn from(b: bool) -> Self {
        ConfigNode::Scalar(ScalarValue::Bool(b))
    }
}

impl From<f64> for ConfigNode {
    fn from(x: f64) -> Self {
        ConfigNode::Scalar(ScalarValue::Float(x))
    }
}

impl From<Vec<ConfigNode>> for ConfigNode {
    fn from(items: Vec<ConfigNode>) -> Self {
        ConfigNode::Sequence(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(ConfigNode::null().kind(), NodeKind::Null);
        assert_eq!(ConfigNode::from(true).kind(), NodeKind::Bool);
        assert_eq!(ConfigNode::from(7).kind(), NodeKind::Integer);
        assert_eq!(ConfigNode::from(1.5).kind(), NodeKind::Float);
        assert_eq!(ConfigNode::from("s").kind(), NodeKind::String);
        assert_eq!(ConfigNode::empty_mapping().kind(), NodeKind::Mapping);
        assert_eq!(ConfigNode::from(vec![]).kind(), NodeKind::Sequence);
    }

    #[test]
    fn test_typed_views_do_not_coerce() {
        let number = ConfigNode::from(100);
        assert_eq!(number.as_i64(), Some(100));
        assert_eq!(number.as_str(), None);
        assert_eq!(number.as_bool(), None);

        let text = ConfigNode::from("100");
        assert_eq!(text.as_i64(), None);
        assert_eq!(text.as_str(), Some("100"));

        let float = ConfigNode::from(100.0);
        assert_eq!(float.as_i64(), None);
        assert_eq!(float.as_f64(), Some(100.0));
    }

    #[test]
    fn test_mapping_get() {
        let node = ConfigNode::mapping([("a", ConfigNode::from("b"))]);
        assert!(node.is_mapping());
        assert_eq!(node.get("a").and_then(ConfigNode::as_str), Some("b"));
        assert!(node.get("missing").is_none());
        assert!(ConfigNode::from("scalar").get("a").is_none());
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::Mapping.to_string(), "mapping");
        assert_eq!(NodeKind::Bool.to_string(), "boolean");
        assert_eq!(NodeKind::Sequence.to_string(), "sequence");
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(ScalarValue::String("hi".to_string()).to_string(), "hi");
        assert_eq!(ScalarValue::Integer(5000).to_string(), "5000");
        assert_eq!(ScalarValue::Bool(false).to_string(), "false");
        assert_eq!(ScalarValue::Null.to_string(), "null");
    }

    #[test]
    fn test_sequence_view() {
        let node = ConfigNode::from(vec![ConfigNode::from(1), ConfigNode::from(2)]);
        assert_eq!(node.as_sequence().map(|s| s.len()), Some(2));
        assert!(node.as_mapping().is_none());
        assert!(node.as_scalar().is_none());
    }
}
