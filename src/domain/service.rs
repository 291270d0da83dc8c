// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed accessor trait definition.
//!
//! This module defines the `ConfigReader` trait, the main interface for reading
//! values out of a loaded document by dot-path.
//!
//! Single-key accessors fail fast and return a `Result`. The batch accessors are
//! best-effort: a path that fails to resolve or type-check yields the type's zero
//! value (`""`, `0`, `false`) in its slot. A substituted zero cannot be told apart
//! from a genuine zero in the document; callers that care should use the single-key
//! accessors.

use crate::domain::{ConfigNode, Result};

/// The typed read surface of a configuration document.
///
/// Implementors provide the single-key accessors; the batch accessors and `has`
/// come for free.
///
/// # Examples
///
/// ```rust
/// use dots::domain::{ConfigError, ConfigNode, ConfigReader, Result};
///
/// struct Fixed;
///
/// impl ConfigReader for Fixed {
///     fn get_node(&self, key: &str) -> Result<ConfigNode> {
///         Err(ConfigError::KeyNotFound { key: key.into(), segment: key.into() })
///     }
///     fn get_string(&self, key: &str) -> Result<String> {
///         match key {
///             "name" => Ok("jack".to_string()),
///             _ => self.get_node(key).map(|_| String::new()),
///         }
///     }
///     fn get_int(&self, key: &str) -> Result<i64> {
///         self.get_node(key).map(|_| 0)
///     }
///     fn get_bool(&self, key: &str) -> Result<bool> {
///         self.get_node(key).map(|_| false)
///     }
/// }
///
/// let reader = Fixed;
/// assert_eq!(reader.get_strings(&["name", "missing"]), vec!["jack", ""]);
/// ```
pub trait ConfigReader {
    /// Returns the raw node at `key`, without any type check.
    fn get_node(&self, key: &str) -> Result<ConfigNode>;

    /// Returns the string at `key`.
    ///
    /// Fails with `KeyNotFound` if any segment is absent, and with `TypeMismatch`
    /// if an intermediate node is not a mapping or the leaf is not a string.
    fn get_string(&self, key: &str) -> Result<String>;

    /// Returns the integer at `key`. Strings and floats are not coerced.
    fn get_int(&self, key: &str) -> Result<i64>;

    /// Returns the boolean at `key`.
    fn get_bool(&self, key: &str) -> Result<bool>;

    /// Returns `true` if `key` resolves to any node.
    fn has(&self, key: &str) -> bool {
        self.get_node(key).is_ok()
    }

    /// Resolves each key independently, substituting `""` for failures.
    fn get_strings<S: AsRef<str>>(&self, keys: &[S]) -> Vec<String>
    where
        Self: Sized,
    {
        keys.iter()
            .map(|key| best_effort(key.as_ref(), self.get_string(key.as_ref())))
            .collect()
    }

    /// Resolves each key independently, substituting `0` for failures.
    fn get_ints<S: AsRef<str>>(&self, keys: &[S]) -> Vec<i64>
    where
        Self: Sized,
    {
        keys.iter()
            .map(|key| best_effort(key.as_ref(), self.get_int(key.as_ref())))
            .collect()
    }

    /// Resolves each key independently, substituting `false` for failures.
    fn get_bools<S: AsRef<str>>(&self, keys: &[S]) -> Vec<bool>
    where
        Self: Sized,
    {
        keys.iter()
            .map(|key| best_effort(key.as_ref(), self.get_bool(key.as_ref())))
            .collect()
    }
}

fn best_effort<T: Default>(key: &str, result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::debug!("Substituting zero value for key '{}': {}", key, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use std::collections::HashMap;

    struct MapReader {
        strings: HashMap<&'static str, &'static str>,
        ints: HashMap<&'static str, i64>,
    }

    impl MapReader {
        fn new() -> Self {
            Self {
                strings: HashMap::from([("y", "jack"), ("x.b.c.d", "hello")]),
                ints: HashMap::from([("a.port", 5000)]),
            }
        }

        fn missing(key: &str) -> ConfigError {
            ConfigError::KeyNotFound {
                key: key.to_string(),
                segment: key.to_string(),
            }
        }
    }

    impl ConfigReader for MapReader {
        fn get_node(&self, key: &str) -> Result<ConfigNode> {
            if let Some(s) = self.strings.get(key) {
                return Ok(ConfigNode::from(*s));
            }
            if let Some(i) = self.ints.get(key) {
                return Ok(ConfigNode::from(*i));
            }
            Err(Self::missing(key))
        }

        fn get_string(&self, key: &str) -> Result<String> {
            self.strings
                .get(key)
                .map(|s| s.to_string())
                .ok_or_else(|| Self::missing(key))
        }

        fn get_int(&self, key: &str) -> Result<i64> {
            self.ints.get(key).copied().ok_or_else(|| Self::missing(key))
        }

        fn get_bool(&self, key: &str) -> Result<bool> {
            Err(Self::missing(key))
        }
    }

    #[test]
    fn test_get_strings_substitutes_empty_string() {
        let reader = MapReader::new();
        let values = reader.get_strings(&["y", "a.missing", "x.b.c.d"]);
        assert_eq!(values, vec!["jack", "", "hello"]);
    }

    #[test]
    fn test_get_ints_substitutes_zero() {
        let reader = MapReader::new();
        let keys = vec!["a.port".to_string(), "y".to_string()];
        assert_eq!(reader.get_ints(&keys), vec![5000, 0]);
    }

    #[test]
    fn test_get_bools_substitutes_false() {
        let reader = MapReader::new();
        assert_eq!(reader.get_bools(&["anything"]), vec![false]);
    }

    #[test]
    fn test_batch_empty_input() {
        let reader = MapReader::new();
        let keys: [&str; 0] = [];
        assert!(reader.get_strings(&keys).is_empty());
    }

    #[test]
    fn test_has() {
        let reader = MapReader::new();
        assert!(reader.has("y"));
        assert!(reader.has("a.port"));
        assert!(!reader.has("nope"));
    }
}
