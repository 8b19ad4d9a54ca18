//! Format detection and handler trait

use crate::ConfigNode;
use crate::error::Result;
use crate::handlers::{JsonHandler, TomlHandler, YamlHandler};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported document formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detect format from the extension of a location string.
    ///
    /// Works for filesystem paths and URLs alike: only the last `/`-separated
    /// segment is inspected, and any query string or fragment is ignored.
    pub fn from_location(location: &str) -> Option<Self> {
        let tail = location
            .split(['?', '#'])
            .next()
            .unwrap_or(location)
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(location);
        let (_, ext) = tail.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Detect format from content heuristics
    pub fn from_content(content: &str) -> Self {
        let trimmed = content.trim_start();

        // JSON starts with { or [
        if trimmed.starts_with('{') {
            return Self::Json;
        }

        // TOML has [section] headers or key = value
        if (trimmed.starts_with('[') || trimmed.contains("\n["))
            && trimmed.lines().any(|l| l.contains(" = "))
        {
            return Self::Toml;
        }

        if trimmed.starts_with('[') {
            return Self::Json;
        }

        if trimmed
            .lines()
            .next()
            .is_some_and(|l| l.contains(" = ") && !l.contains(": "))
        {
            return Self::Toml;
        }

        Self::Yaml
    }

    /// Detect format from a location, falling back to the content
    pub fn detect(location: &str, content: &str) -> Self {
        Self::from_location(location).unwrap_or_else(|| Self::from_content(content))
    }

    /// Get the handler that parses and renders this format
    pub fn handler(&self) -> &'static dyn FormatHandler {
        match self {
            Self::Yaml => &YamlHandler,
            Self::Json => &JsonHandler,
            Self::Toml => &TomlHandler,
        }
    }

    /// Get default file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
            Self::Toml => &["toml"],
        }
    }

    /// Display name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s).ok_or_else(|| crate::Error::UnsupportedFormat(s.to_string()))
    }
}

/// Trait for format-specific handlers
pub trait FormatHandler: Send + Sync {
    /// Format identifier
    fn format(&self) -> Format;

    /// Parse source into a tree.
    ///
    /// Returns `Ok(None)` when the document is empty or consists only of a
    /// null value.
    fn parse(&self, source: &str) -> Result<Option<ConfigNode>>;

    /// Render a tree back to text
    fn render(&self, node: &ConfigNode) -> Result<String>;
}
