//! Dotted sub-tree paths
//!
//! Imports can select a nested object from a loaded document and move it to
//! a different position before merging. Both positions are written as
//! dot-separated object keys.
//!
//! # Examples
//!
//! ```
//! use strata_tree::path::{locate, relocate};
//! use serde_json::json;
//!
//! let imported = json!({"a": {"b": {"x": 1, "y": 2}}});
//! let subtree = locate(imported, Some("a.b")).unwrap();
//! assert_eq!(subtree, json!({"x": 1, "y": 2}));
//!
//! let moved = relocate(subtree, Some("c.d")).unwrap();
//! assert_eq!(moved, json!({"c": {"d": {"x": 1, "y": 2}}}));
//! ```

use crate::error::{Error, Result};
use crate::{ConfigMap, ConfigNode};

/// Separator between the keys of a dotted path
pub const OBJECT_PATH_SEPARATOR: char = '.';

/// A parsed, non-empty dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DottedPath {
    raw: String,
    segments: Vec<String>,
}

impl DottedPath {
    /// Parse a dotted path.
    ///
    /// An empty string is treated as an absent path and yields `Ok(None)`.
    /// Empty segments (`a..b`, `a.` or `.a`) are rejected.
    ///
    /// ```
    /// use strata_tree::path::DottedPath;
    ///
    /// let path = DottedPath::parse("server.http").unwrap().unwrap();
    /// assert_eq!(path.segments(), ["server", "http"]);
    ///
    /// assert!(DottedPath::parse("").unwrap().is_none());
    /// assert!(DottedPath::parse("server.").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Option<Self>> {
        if path.is_empty() {
            return Ok(None);
        }

        let segments: Vec<String> = path
            .split(OBJECT_PATH_SEPARATOR)
            .map(str::to_string)
            .collect();

        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }

        Ok(Some(Self {
            raw: path.to_string(),
            segments,
        }))
    }

    /// The path as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The individual object keys, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// Extract the object found at `path`.
///
/// An absent path returns `tree` unchanged. Every segment, including the
/// last, must name an object; otherwise the error names the failing segment.
pub fn locate(tree: ConfigNode, path: Option<&str>) -> Result<ConfigNode> {
    let Some(path) = path.map(DottedPath::parse).transpose()?.flatten() else {
        return Ok(tree);
    };

    let mut current = tree;
    for segment in path.segments() {
        current = match current.as_object_mut().and_then(|map| map.remove(segment)) {
            Some(child) if child.is_object() => child,
            _ => {
                return Err(Error::ObjectNotFound {
                    path: path.as_str().to_string(),
                    segment: segment.clone(),
                });
            }
        };
    }

    Ok(current)
}

/// Nest `tree` under `path`.
///
/// An absent path returns `tree` unchanged. Otherwise a fresh object chain
/// is built for every segment and `tree` becomes the value of the last one.
pub fn relocate(tree: ConfigNode, path: Option<&str>) -> Result<ConfigNode> {
    let Some(path) = path.map(DottedPath::parse).transpose()?.flatten() else {
        return Ok(tree);
    };

    Ok(path.segments().iter().rev().fold(tree, |inner, segment| {
        let mut object = ConfigMap::new();
        object.insert(segment.clone(), inner);
        ConfigNode::Object(object)
    }))
}
