//! Error types for strata-core

use crate::trail::{Chain, Cycle};

/// Result type for strata-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a configuration.
///
/// Every resolution failure carries the location that failed and the chain
/// of documents that led to it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open config file: {trail}")]
    Open {
        location: String,
        trail: Chain,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {trail}")]
    Read {
        location: String,
        trail: Chain,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {trail}")]
    Parse {
        location: String,
        trail: Chain,
        #[source]
        source: strata_tree::Error,
    },

    #[error("Config file is empty: {trail}")]
    EmptyDocument { location: String, trail: Chain },

    #[error("Config file root is not an object: {trail}")]
    NotAnObject { location: String, trail: Chain },

    #[error("Circular import: {trail}")]
    CircularImport { location: String, trail: Chain },

    #[error("Circular inheritance: {trail}")]
    CircularInheritance { location: String, trail: Chain },

    #[error("{source} in imported config '{location}': {trail}")]
    SubTree {
        location: String,
        trail: Chain,
        #[source]
        source: strata_tree::Error,
    },

    #[error("Invalid import target for '{location}': {source}: {trail}")]
    InvalidTarget {
        location: String,
        trail: Chain,
        #[source]
        source: strata_tree::Error,
    },

    #[error("Failed to bind configuration '{location}': {source}")]
    Bind {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid override '{input}': expected KEY=VALUE")]
    MalformedOverride { input: String },

    #[error(transparent)]
    Tree(#[from] strata_tree::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn circular_import(cycle: Cycle) -> Self {
        Self::CircularImport {
            location: cycle.referrer,
            trail: cycle.chain,
        }
    }

    pub(crate) fn circular_inheritance(cycle: Cycle) -> Self {
        Self::CircularInheritance {
            location: cycle.referrer,
            trail: cycle.chain,
        }
    }

    /// The location in error, when the failure concerns a document
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Open { location, .. }
            | Self::Read { location, .. }
            | Self::Parse { location, .. }
            | Self::EmptyDocument { location, .. }
            | Self::NotAnObject { location, .. }
            | Self::CircularImport { location, .. }
            | Self::CircularInheritance { location, .. }
            | Self::SubTree { location, .. }
            | Self::InvalidTarget { location, .. }
            | Self::Bind { location, .. } => Some(location.as_str()),
            _ => None,
        }
    }

    /// The chain of documents leading to the failure
    pub fn trail(&self) -> Option<&[String]> {
        match self {
            Self::Open { trail, .. }
            | Self::Read { trail, .. }
            | Self::Parse { trail, .. }
            | Self::EmptyDocument { trail, .. }
            | Self::NotAnObject { trail, .. }
            | Self::CircularImport { trail, .. }
            | Self::CircularInheritance { trail, .. }
            | Self::SubTree { trail, .. }
            | Self::InvalidTarget { trail, .. } => Some(&**trail),
            _ => None,
        }
    }

    pub fn is_circular(&self) -> bool {
        matches!(
            self,
            Self::CircularImport { .. } | Self::CircularInheritance { .. }
        )
    }
}
