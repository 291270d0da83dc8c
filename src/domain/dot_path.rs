// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-path newtype for addressing nested configuration values.
//!
//! This module provides the `DotPath` type, a wrapper around `String` that names a
//! value inside a nested document by joining mapping keys with `.`.

use std::fmt;

/// The separator between path segments.
pub const SEGMENT_SEPARATOR: char = '.';

/// A period-delimited path into a configuration document.
///
/// `DotPath` keeps the original string intact (it is the cache key for typed
/// accessors) and exposes the segments the resolver walks.
///
/// Splitting never drops segments: an empty path has exactly one empty segment,
/// and `"a..b"` has an empty middle segment. Neither is special-cased; an empty
/// segment simply fails to match any mapping key.
///
/// # Examples
///
/// ```
/// use dots::domain::DotPath;
///
/// let path = DotPath::from("database.primary.host");
/// let segments: Vec<&str> = path.segments().collect();
///
/// assert_eq!(segments, vec!["database", "primary", "host"]);
/// assert_eq!(path.as_str(), "database.primary.host");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DotPath(String);

impl DotPath {
    /// Creates a new `DotPath` from a `String`.
    pub fn new(path: String) -> Self {
        DotPath(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `DotPath` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the segments of the path, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dots::domain::DotPath;
    ///
    /// assert_eq!(DotPath::from("").segments().collect::<Vec<_>>(), vec![""]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(SEGMENT_SEPARATOR)
    }

    /// Returns the final segment of the path.
    pub fn leaf(&self) -> &str {
        self.0
            .rsplit(SEGMENT_SEPARATOR)
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl From<String> for DotPath {
    fn from(s: String) -> Self {
        DotPath(s)
    }
}

impl From<&str> for DotPath {
    fn from(s: &str) -> Self {
        DotPath(s.to_string())
    }
}

impl From<DotPath> for String {
    fn from(path: DotPath) -> Self {
        path.0
    }
}

impl AsRef<str> for DotPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
