// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loaded configuration documents.
//!
//! This module provides `ConfigDocument`, which owns a parsed tree plus one cache
//! per accessor type, and implements the `ConfigReader` trait on top of the
//! resolver.

use crate::adapters::file::read_document;
use crate::domain::{ConfigError, ConfigNode, ConfigReader, DotPath, NodeKind, Result};
use crate::ports::DocumentParser;
use crate::service::cache::TypedCache;
use crate::service::resolver::resolve;
use std::path::{Path, PathBuf};

/// Number of cached entries per accessor type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries cached by `get_string`
    pub strings: usize,
    /// Entries cached by `get_int`
    pub ints: usize,
    /// Entries cached by `get_bool`
    pub bools: usize,
}

impl CacheStats {
    /// Total number of cached entries.
    pub fn total(&self) -> usize {
        self.strings + self.ints + self.bools
    }
}

/// A loaded, read-only configuration document.
///
/// The tree is fixed at construction. Each typed accessor memoizes successful
/// lookups in its own cache keyed by the exact path string, so `get_string("a.b")`
/// and `get_int("a.b")` never share an entry. Caches belong to the document; two
/// documents never see each other's entries.
///
/// `ConfigDocument` is `Send + Sync` and can be shared behind an `Arc`.
///
/// # Examples
///
/// ```rust
/// use dots::prelude::*;
///
/// # fn main() -> Result<()> {
/// let doc = ConfigDocument::from_yaml_str("a:\n  host: localhost\n  port: 5000\n")?;
///
/// assert_eq!(doc.get_string("a.host")?, "localhost");
/// assert_eq!(doc.get_int("a.port")?, 5000);
/// assert!(doc.get_int("a.host").unwrap_err().is_type_mismatch());
/// assert!(doc.get_string("a.missing").unwrap_err().is_key_not_found());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigDocument {
    root: ConfigNode,
    source_path: Option<PathBuf>,
    strings: TypedCache<String>,
    ints: TypedCache<i64>,
    bools: TypedCache<bool>,
}

impl ConfigDocument {
    /// Creates a document from an already parsed tree.
    pub fn new(root: ConfigNode) -> Self {
        Self {
            root,
            source_path: None,
            strings: TypedCache::new(),
            ints: TypedCache::new(),
            bools: TypedCache::new(),
        }
    }

    /// Loads a YAML document from `path`.
    ///
    /// # Errors
    ///
    /// * `ReadError` - the file is missing, unreadable or too large
    /// * `ParseError` - the file is not valid YAML
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use dots::prelude::*;
    ///
    /// let doc = ConfigDocument::load("example.yml").unwrap();
    /// let host = doc.get_string("a.b.c").unwrap();
    /// ```
    #[cfg(feature = "yaml")]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, &crate::adapters::YamlParser::new())
    }

    /// Loads a document from `path` using `parser`.
    pub fn load_with<P, D>(path: P, parser: &D) -> Result<Self>
    where
        P: AsRef<Path>,
        D: DocumentParser + ?Sized,
    {
        let path = path.as_ref();

        let result =
            read_document(path).and_then(|content| Self::from_bytes_with(&content, parser));

        match result {
            Ok(mut document) => {
                tracing::debug!("Loaded configuration from '{}'", path.display());
                document.source_path = Some(path.to_path_buf());
                Ok(document)
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to load configuration from '{}': {}",
                    path.display(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    #[cfg(feature = "yaml")]
    pub fn load_from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        use crate::adapters::file::{default_config_path, DEFAULT_FILE_NAME};

        let path = default_config_path(app_name, qualifier, DEFAULT_FILE_NAME)?;
        Self::load(path)
    }

    /// Parses a document from in-memory YAML.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::from_bytes_with(content.as_bytes(), &crate::adapters::YamlParser::new())
    }

    /// Parses a document from raw bytes using `parser`.
    pub fn from_bytes_with<D>(content: &[u8], parser: &D) -> Result<Self>
    where
        D: DocumentParser + ?Sized,
    {
        parser.parse(content).map(Self::new)
    }

    /// Returns the root of the document tree.
    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    /// Returns the path this document was loaded from, if it came from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Resolves `key` and borrows the node it points at.
    ///
    /// Unlike the typed accessors this never touches the caches.
    pub fn resolve(&self, key: &str) -> Result<&ConfigNode> {
        resolve(&self.root, &DotPath::from(key))
    }

    /// Returns how many entries each typed cache holds.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            strings: self.strings.len(),
            ints: self.ints.len(),
            bools: self.bools.len(),
        }
    }

    /// Cache lookup, then resolve, type-check and memoize.
    fn get_typed<T, F>(
        &self,
        key: &str,
        cache: &TypedCache<T>,
        expected: NodeKind,
        extract: F,
    ) -> Result<T>
    where
        T: Clone,
        F: FnOnce(&ConfigNode) -> Option<T>,
    {
        if let Some(value) = cache.get(key) {
            tracing::debug!("Cache hit for {} key '{}'", expected, key);
            return Ok(value);
        }

        let path = DotPath::from(key);
        let node = resolve(&self.root, &path)
            .map_err(|e| ConfigError::extraction(key, expected.as_str(), e))?;

        let value = extract(node).ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            segment: path.leaf().to_string(),
            expected,
            actual: node.kind(),
        })?;

        tracing::debug!("Caching {} value for key '{}'", expected, key);
        cache.insert(key, value.clone());
        Ok(value)
    }
}

impl ConfigReader for ConfigDocument {
    fn get_node(&self, key: &str) -> Result<ConfigNode> {
        self.resolve(key).cloned()
    }

    fn get_string(&self, key: &str) -> Result<String> {
        self.get_typed(key, &self.strings, NodeKind::String, |node| {
            node.as_str().map(str::to_string)
        })
    }

    fn get_int(&self, key: &str) -> Result<i64> {
        self.get_typed(key, &self.ints, NodeKind::Integer, ConfigNode::as_i64)
    }

    fn get_bool(&self, key: &str) -> Result<bool> {
        self.get_typed(key, &self.bools, NodeKind::Bool, ConfigNode::as_bool)
    }
}
