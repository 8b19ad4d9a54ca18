//! Layered configuration resolution
//!
//! A configuration document may inherit from a single parent document and
//! import any number of other documents (or sub-trees of them). The
//! [`Resolver`] follows both relationships, detects cycles, and produces one
//! fully merged tree ready to be bound to a typed configuration.
//!
//! # Example
//!
//! ```
//! use strata_core::{MemorySourceProvider, Resolver};
//! use serde_json::json;
//!
//! let provider = MemorySourceProvider::new()
//!     .with("base.yml", "name: base\nopts:\n  a: 0\n  b: 2\n")
//!     .with("child.yml", "inherits: base.yml\nname: child\nopts:\n  a: 1\n");
//!
//! let tree = Resolver::new(provider).resolve_tree("child.yml").unwrap();
//! assert_eq!(tree, json!({"name": "child", "opts": {"a": 1, "b": 2}}));
//! ```

pub mod bind;
mod document;
pub mod error;
pub mod import;
pub mod options;
pub mod overrides;
pub mod resolver;
pub mod source;
pub mod trail;

pub use bind::{bind, render_tree, render_value};
pub use error::{Error, Result};
pub use import::{ImportDecl, ImportSpec};
pub use options::ResolverOptions;
pub use overrides::PropertyOverrides;
pub use resolver::Resolver;
pub use source::{FileSourceProvider, MemorySourceProvider, SourceProvider};
pub use trail::{Chain, PathTrail, TrailScope, TrailSnapshot};

pub use strata_tree::{ConfigNode, Format};
