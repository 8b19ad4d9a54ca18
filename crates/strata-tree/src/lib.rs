//! Configuration trees for strata
//!
//! Provides the generic tree value shared by every resolution step, the
//! deep-merge rule, dotted sub-tree paths and the document formats used to
//! parse and render trees.

pub mod error;
pub mod format;
pub mod handlers;
pub mod merge;
pub mod overrides;
pub mod path;

pub use error::{Error, Result};
pub use format::{Format, FormatHandler};
pub use merge::{merge, merged};
pub use overrides::apply_override;
pub use path::{DottedPath, locate, relocate};

/// A generic configuration tree: objects, arrays and scalars.
///
/// Every format is parsed into this representation so that merging and
/// relocation never need to know which syntax a document was written in.
pub type ConfigNode = serde_json::Value;

/// The object variant's mapping type.
pub type ConfigMap = serde_json::Map<String, ConfigNode>;
