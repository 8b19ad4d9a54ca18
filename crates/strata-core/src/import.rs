//! Import declarations
//!
//! The import key accepts four shapes:
//!
//! ```yaml
//! import: common.yml                      # a location
//! import:                                 # an import object
//!   location: db.yml
//!   optional: true
//!   object: environments.prod             # sub-tree to take
//!   target: database                      # where to put it
//!   processParentAndImports: false        # import the raw document
//! import: [common.yml, {location: db.yml}] # a list of either
//! ```
//!
//! All of them are normalised into [`ImportSpec`]s once, when the key is
//! removed from the importing document.

use crate::options::{
    IMPORT_KEY_LOCATION, IMPORT_KEY_OPTIONAL, IMPORT_KEY_PROCESS_PARENT_AND_IMPORTS,
    IMPORT_KEY_SUB_TREE, IMPORT_KEY_TARGET,
};
use strata_tree::{ConfigMap, ConfigNode};

/// One document (or sub-tree of a document) to merge into the importer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub location: String,
    pub optional: bool,
    /// Dotted path of the object to extract from the imported document
    pub subtree: Option<String>,
    /// Dotted path to nest the imported tree under
    pub target: Option<String>,
    pub process_parent_and_imports: bool,
}

impl ImportSpec {
    /// An import of `location` with every other field defaulted.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            optional: false,
            subtree: None,
            target: None,
            process_parent_and_imports: true,
        }
    }

    /// Parse a single import declaration.
    ///
    /// Returns `None` for anything other than a string or an object with a
    /// string `location`.
    pub fn from_node(node: &ConfigNode) -> Option<Self> {
        match node {
            ConfigNode::String(location) => Some(Self::new(location.clone())),
            ConfigNode::Object(object) => Self::from_object(object),
            _ => None,
        }
    }

    fn from_object(object: &ConfigMap) -> Option<Self> {
        let location = object.get(IMPORT_KEY_LOCATION)?.as_str()?;
        let text = |key: &str| object.get(key).and_then(ConfigNode::as_str).map(str::to_string);
        let flag = |key: &str, default: bool| {
            object
                .get(key)
                .and_then(ConfigNode::as_bool)
                .unwrap_or(default)
        };

        Some(Self {
            location: location.to_string(),
            optional: flag(IMPORT_KEY_OPTIONAL, false),
            subtree: text(IMPORT_KEY_SUB_TREE),
            target: text(IMPORT_KEY_TARGET),
            process_parent_and_imports: flag(IMPORT_KEY_PROCESS_PARENT_AND_IMPORTS, true),
        })
    }
}

/// The value found under the import key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDecl {
    /// No import key
    Absent,
    /// A string or an import object
    Single(ImportSpec),
    /// A list of strings and import objects, applied in order
    Many(Vec<ImportSpec>),
    /// Any other value; imports nothing
    Ignored,
}

impl ImportDecl {
    /// Normalise the (already removed) import key value.
    pub fn parse(node: Option<&ConfigNode>) -> Self {
        match node {
            None => Self::Absent,
            Some(ConfigNode::Array(items)) => {
                let specs = items
                    .iter()
                    .filter_map(|item| {
                        let spec = ImportSpec::from_node(item);
                        if spec.is_none() {
                            tracing::debug!(?item, "Skipping invalid import entry");
                        }
                        spec
                    })
                    .collect();
                Self::Many(specs)
            }
            Some(node) => ImportSpec::from_node(node).map_or(Self::Ignored, Self::Single),
        }
    }

    pub fn into_specs(self) -> Vec<ImportSpec> {
        match self {
            Self::Absent | Self::Ignored => Vec::new(),
            Self::Single(spec) => vec![spec],
            Self::Many(specs) => specs,
        }
    }
}
