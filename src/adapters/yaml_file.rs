// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! This module provides a `DocumentParser` backed by `serde_yaml`. It converts the
//! generic `serde_yaml::Value` into the crate's `ConfigNode` tree, keeping the scalar
//! kinds YAML assigned.

use crate::domain::{ConfigError, ConfigNode, Mapping, Result, ScalarValue};
use crate::ports::DocumentParser;
use serde::Deserialize;
use serde_yaml::Value;

fn parse_error(context: &str, e: serde_yaml::Error) -> ConfigError {
    ConfigError::ParseError {
        message: format!("{}: {}", context, e),
        source: Some(Box::new(e)),
    }
}

/// YAML parser implementation.
///
/// Only the first document of a multi-document stream is read; an empty stream
/// parses to an empty mapping. Merge keys (`<<: *base`) are expanded, with the
/// mapping's own entries taking precedence over merged ones. Mapping keys must be
/// scalars; boolean and numeric keys are kept in their YAML text form so
/// `ports.8080` can address `ports: {8080: ...}`. Tags are dropped and the tagged
/// value is kept.
///
/// Integers that fit in `i64` stay integers. Larger ones up to `u64::MAX` become
/// floats; anything beyond `u64` fails with `ParseError`.
///
/// # Examples
///
/// ```rust
/// use dots::adapters::YamlParser;
/// use dots::domain::ConfigNode;
/// use dots::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let root = parser.parse(b"database:\n  host: localhost\n  port: 5432").unwrap();
/// let database = root.get("database").unwrap();
///
/// assert_eq!(database.get("host").and_then(ConfigNode::as_str), Some("localhost"));
/// assert_eq!(database.get("port").and_then(ConfigNode::as_i64), Some(5432));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a configuration node.
    fn convert(value: Value) -> Result<ConfigNode> {
        Ok(match value {
            Value::Null => ConfigNode::null(),
            Value::Bool(b) => ConfigNode::from(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ConfigNode::from(i),
                // Fractional, or above i64::MAX but within u64
                None => ConfigNode::from(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ConfigNode::from(s),
            Value::Sequence(items) => ConfigNode::Sequence(
                items
                    .into_iter()
                    .map(Self::convert)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => {
                let mut entries = Mapping::new();
                for (key, val) in map {
                    entries.insert(Self::convert_key(key)?, Self::convert(val)?);
                }
                ConfigNode::Mapping(entries)
            }
            Value::Tagged(tagged) => Self::convert(tagged.value)?,
        })
    }

    /// Converts a YAML mapping key into a string key.
    fn convert_key(key: Value) -> Result<String> {
        match key {
            Value::String(s) => Ok(s),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Tagged(tagged) => Self::convert_key(tagged.value),
            other => Err(ConfigError::ParseError {
                message: format!(
                    "Unsupported mapping key of kind {}",
                    Self::convert(other)
                        .map(|node| node.kind().to_string())
                        .unwrap_or_else(|_| "unknown".to_string())
                ),
                source: None,
            }),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &[u8]) -> Result<ConfigNode> {
        let document = match serde_yaml::Deserializer::from_slice(content).next() {
            Some(document) => document,
            None => return Ok(ConfigNode::empty_mapping()),
        };

        let mut value =
            Value::deserialize(document).map_err(|e| parse_error("Failed to parse YAML", e))?;
        value
            .apply_merge()
            .map_err(|e| parse_error("Failed to apply YAML merge keys", e))?;

        match Self::convert(value)? {
            ConfigNode::Scalar(ScalarValue::Null) => Ok(ConfigNode::empty_mapping()),
            root => Ok(root),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;

    fn parse(yaml: &str) -> Result<ConfigNode> {
        YamlParser::new().parse(yaml.as_bytes())
    }

    #[test]
    fn test_yaml_parser_simple() {
        let root = parse("key: value").unwrap();
        assert_eq!(root.get("key").and_then(ConfigNode::as_str), Some("value"));
    }

    #[test]
    fn test_yaml_parser_deeply_nested() {
        let yaml = r#"
---
x:
  b:
    c:
      d: hello
      e: 100
"#;
        let root = parse(yaml).unwrap();
        let c = root
            .get("x")
            .and_then(|x| x.get("b"))
            .and_then(|b| b.get("c"))
            .unwrap();

        assert_eq!(c.get("d").and_then(ConfigNode::as_str), Some("hello"));
        assert_eq!(c.get("e").and_then(ConfigNode::as_i64), Some(100));
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let yaml = r#"
string_value: hello
quoted_number: "42"
number_value: 42
float_value: 3.5
bool_value: true
null_value: null
"#;
        let root = parse(yaml).unwrap();
        let kind = |key: &str| root.get(key).map(ConfigNode::kind);

        assert_eq!(kind("string_value"), Some(NodeKind::String));
        assert_eq!(kind("quoted_number"), Some(NodeKind::String));
        assert_eq!(kind("number_value"), Some(NodeKind::Integer));
        assert_eq!(kind("float_value"), Some(NodeKind::Float));
        assert_eq!(kind("bool_value"), Some(NodeKind::Bool));
        assert_eq!(kind("null_value"), Some(NodeKind::Null));
    }

    #[test]
    fn test_yaml_parser_sequence() {
        let root = parse("servers:\n  - one\n  - two\n").unwrap();
        let servers = root.get("servers").and_then(ConfigNode::as_sequence).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[1].as_str(), Some("two"));
    }

    #[test]
    fn test_yaml_parser_scalar_keys() {
        let root = parse("ports:\n  8080: web\n  true: yes-key\n").unwrap();
        let ports = root.get("ports").unwrap();
        assert_eq!(ports.get("8080").and_then(ConfigNode::as_str), Some("web"));
        assert_eq!(ports.get("true").and_then(ConfigNode::as_str), Some("yes-key"));
    }

    #[test]
    fn test_yaml_parser_rejects_complex_keys() {
        let err = parse("? [a, b]\n: value\n").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        let root = parse("").unwrap();
        assert_eq!(root, ConfigNode::empty_mapping());
    }

    #[test]
    fn test_yaml_parser_merge_keys() {
        let yaml = r#"
base: &base
  host: localhost
  port: 5000
prod:
  <<: *base
  port: 6000
"#;
        let root = parse(yaml).unwrap();
        let prod = root.get("prod").unwrap();

        assert_eq!(prod.get("host").and_then(ConfigNode::as_str), Some("localhost"));
        assert_eq!(prod.get("port").and_then(ConfigNode::as_i64), Some(6000));
        assert!(prod.get("<<").is_none());
    }

    #[test]
    fn test_yaml_parser_merge_of_scalar_is_an_error() {
        let err = parse("a:\n  <<: 1\n").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_yaml_parser_first_document_only() {
        let root = parse("a: 1\n---\na: 2\n").unwrap();
        assert_eq!(root.get("a").and_then(ConfigNode::as_i64), Some(1));
    }

    #[test]
    fn test_yaml_parser_integer_range() {
        let root = parse("big: 18446744073709551615\nmax: 9223372036854775807\n").unwrap();
        assert_eq!(root.get("big").map(ConfigNode::kind), Some(NodeKind::Float));
        assert_eq!(root.get("max").and_then(ConfigNode::as_i64), Some(i64::MAX));

        let err = parse("huge: 99999999999999999999\n").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_yaml_parser_invalid_indentation() {
        let yaml = r#"
---
a:
host: localhost
  port: 5000
"#;
        let err = parse(yaml).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_yaml_parser_invalid() {
        assert!(parse("invalid: yaml: content:").is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::default();
        assert_eq!(parser.supported_extensions(), &["yaml", "yml"]);
    }
}
