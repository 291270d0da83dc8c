// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dot-path resolution over a document tree.

use crate::domain::{ConfigError, ConfigNode, DotPath, Mapping, NodeKind, Result};

/// Walks `root` segment by segment and returns the node `path` points at.
///
/// Every segment but the last must name a mapping. The last segment may name any
/// node; its kind is left for the caller to check. The walk borrows the tree and
/// never copies intermediate mappings.
///
/// # Errors
///
/// * `KeyNotFound` - a segment is absent, including the single empty segment of an
///   empty path and any lookup against a root that is not a mapping
/// * `TypeMismatch` - an intermediate segment names something other than a mapping
///
/// # Examples
///
/// ```rust
/// use dots::domain::{ConfigNode, DotPath};
/// use dots::service::resolve;
///
/// let root = ConfigNode::mapping([(
///     "a",
///     ConfigNode::mapping([("port", ConfigNode::from(5000))]),
/// )]);
///
/// let node = resolve(&root, &DotPath::from("a.port")).unwrap();
/// assert_eq!(node.as_i64(), Some(5000));
///
/// let err = resolve(&root, &DotPath::from("a.missing")).unwrap_err();
/// assert!(err.is_key_not_found());
/// ```
pub fn resolve<'a>(root: &'a ConfigNode, path: &DotPath) -> Result<&'a ConfigNode> {
    let segments: Vec<&str> = path.segments().collect();
    // split() always yields at least one segment
    let (leaf, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Err(not_found(path, "")),
    };

    let mut current: &Mapping = match root {
        ConfigNode::Mapping(map) => map,
        _ => return Err(not_found(path, segments[0])),
    };

    for segment in parents {
        current = match current.get(*segment) {
            None => return Err(not_found(path, segment)),
            Some(ConfigNode::Mapping(map)) => map,
            Some(other) => {
                return Err(ConfigError::TypeMismatch {
                    key: path.to_string(),
                    segment: segment.to_string(),
                    expected: NodeKind::Mapping,
                    actual: other.kind(),
                })
            }
        };
    }

    current.get(*leaf).ok_or_else(|| not_found(path, leaf))
}

fn not_found(path: &DotPath, segment: &str) -> ConfigError {
    ConfigError::KeyNotFound {
        key: path.to_string(),
        segment: segment.to_string(),
    }
}
