//! Resolver configuration: reserved keys, external override file, format

use std::path::PathBuf;
use strata_tree::Format;

/// Default key naming a document's parent
pub const DEFAULT_PARENT_KEY: &str = "inherits";

/// Default key listing a document's imports
pub const DEFAULT_IMPORT_KEY: &str = "import";

/// Import object key: location of the imported document (required)
pub const IMPORT_KEY_LOCATION: &str = "location";

/// Import object key: swallow any failure of this import
pub const IMPORT_KEY_OPTIONAL: &str = "optional";

/// Import object key: dotted path of the sub-tree to import
pub const IMPORT_KEY_SUB_TREE: &str = "object";

/// Import object key: dotted path to nest the imported tree under
pub const IMPORT_KEY_TARGET: &str = "target";

/// Import object key: whether the imported document's own parent and
/// imports are resolved
pub const IMPORT_KEY_PROCESS_PARENT_AND_IMPORTS: &str = "processParentAndImports";

pub use strata_tree::path::OBJECT_PATH_SEPARATOR;

/// Options controlling a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Key naming a document's parent
    pub parent_key: String,

    /// Key listing a document's imports. `None` disables imports.
    pub import_key: Option<String>,

    /// Local file whose values override the resolved document.
    /// Ignored when the file does not exist.
    pub external_config: Option<PathBuf>,

    /// Format of every document. `None` detects it per location.
    pub format: Option<Format>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            parent_key: DEFAULT_PARENT_KEY.to_string(),
            import_key: Some(DEFAULT_IMPORT_KEY.to_string()),
            external_config: None,
            format: None,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent_key(mut self, key: impl Into<String>) -> Self {
        self.parent_key = key.into();
        self
    }

    pub fn with_import_key(mut self, key: impl Into<String>) -> Self {
        self.import_key = Some(key.into());
        self
    }

    /// Treat import keys as ordinary data.
    pub fn without_imports(mut self) -> Self {
        self.import_key = None;
        self
    }

    pub fn with_external_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.external_config = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}
