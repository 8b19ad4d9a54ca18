//! Inheritance and import resolution
//!
//! Resolving a document runs in this order:
//! 1. Load the external override file, if configured and present
//! 2. Load the requested document
//! 3. Merge its imports underneath it (the document's own values win)
//! 4. Merge the external override file over the result
//! 5. Climb the parent chain, merging each ancestor underneath
//!
//! Imported documents are resolved the same way, recursively, unless the
//! import opts out with `processParentAndImports: false`.

use serde::de::DeserializeOwned;
use std::fs;
use strata_tree::{ConfigNode, locate, merge, merged, relocate};
use tracing::debug;

use crate::bind::bind;
use crate::document::{parse_tree, read_tree};
use crate::error::{Error, Result};
use crate::import::{ImportDecl, ImportSpec};
use crate::options::ResolverOptions;
use crate::overrides::PropertyOverrides;
use crate::source::{FileSourceProvider, SourceProvider};
use crate::trail::PathTrail;

/// Resolves configuration documents through a [`SourceProvider`].
///
/// A resolver holds no state between calls: every [`resolve_tree`]
/// starts from an empty trail, so one resolver can serve many requests.
///
/// [`resolve_tree`]: Resolver::resolve_tree
#[derive(Debug, Clone)]
pub struct Resolver<P = FileSourceProvider> {
    provider: P,
    options: ResolverOptions,
}

impl<P: SourceProvider> Resolver<P> {
    /// Create a resolver with default options.
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, ResolverOptions::default())
    }

    pub fn with_options(provider: P, options: ResolverOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve `location` into a single merged tree.
    ///
    /// The result has not been bound or validated; it can be rendered for
    /// inspection with [`render_tree`](crate::render_tree).
    pub fn resolve_tree(&self, location: &str) -> Result<ConfigNode> {
        let mut trail = PathTrail::new();

        let external = self.load_external(&mut trail)?;

        trail.append(location);
        debug!(location, "Loading config");
        let tree = self.read(location, &trail)?;
        let mut tree = self.resolve_imports(tree, &mut trail)?;

        if let Some(external) = external {
            merge(external, &mut tree);
        }

        self.resolve_parents(tree, &mut trail)
    }

    /// Resolve `location`, apply `overrides` and bind the result to `T`.
    pub fn build<T: DeserializeOwned>(
        &self,
        location: &str,
        overrides: &PropertyOverrides,
    ) -> Result<T> {
        let mut tree = self.resolve_tree(location)?;
        overrides.apply(&mut tree)?;
        bind(tree, location)
    }

    fn read(&self, location: &str, trail: &PathTrail) -> Result<ConfigNode> {
        read_tree(&self.provider, location, self.options.format, trail)
    }

    /// The external override file is always read from the local filesystem.
    fn load_external(&self, trail: &mut PathTrail) -> Result<Option<ConfigNode>> {
        let Some(file) = &self.options.external_config else {
            return Ok(None);
        };

        if !file.exists() {
            debug!(path = %file.display(), "External config file does not exist, ignoring");
            return Ok(None);
        }

        let canonical = dunce::canonicalize(file).map_err(|source| Error::Open {
            location: file.display().to_string(),
            trail: trail.chain_with(&file.display().to_string()),
            source,
        })?;
        let external_path = canonical.display().to_string();

        trail.append(external_path.as_str());
        debug!(path = %external_path, "Loading external config file");

        let content = fs::read_to_string(&canonical).map_err(|source| Error::Read {
            location: external_path.clone(),
            trail: trail.chain(),
            source,
        })?;
        parse_tree(&external_path, &content, self.options.format, trail).map(Some)
    }

    /// Remove the import key from `importer` and merge every import into it,
    /// in declaration order.
    fn resolve_imports(&self, mut importer: ConfigNode, trail: &mut PathTrail) -> Result<ConfigNode> {
        let Some(import_key) = self.options.import_key.as_deref() else {
            return Ok(importer);
        };

        let declared = importer
            .as_object_mut()
            .and_then(|object| object.remove(import_key));

        ImportDecl::parse(declared.as_ref())
            .into_specs()
            .into_iter()
            .try_fold(importer, |importer, spec| self.apply_import(importer, &spec, trail))
    }

    fn apply_import(
        &self,
        importer: ConfigNode,
        spec: &ImportSpec,
        trail: &mut PathTrail,
    ) -> Result<ConfigNode> {
        debug!(location = %spec.location, "Importing");

        let contribution = match self.load_import(spec, trail) {
            Ok(contribution) => contribution,
            Err(error) if spec.optional => {
                debug!(location = %spec.location, %error, "Failed to read optional config, skipping");
                return Ok(importer);
            }
            Err(error) => return Err(error),
        };

        Ok(merged(importer, contribution))
    }

    /// Load one import and shape it for merging: resolve it, extract the
    /// requested sub-tree, then nest it under the target path.
    fn load_import(&self, spec: &ImportSpec, trail: &mut PathTrail) -> Result<ConfigNode> {
        let tree = {
            let mut branch = trail.scope();
            branch
                .try_append(&spec.location)
                .map_err(Error::circular_import)?;

            let tree = self.read(&spec.location, &branch)?;
            if spec.process_parent_and_imports {
                let tree = self.resolve_imports(tree, &mut branch)?;
                self.resolve_parents(tree, &mut branch)?
            } else {
                self.strip_reserved_keys(tree)
            }
        };

        let located = locate(tree, spec.subtree.as_deref()).map_err(|source| Error::SubTree {
            location: spec.location.clone(),
            trail: trail.chain(),
            source,
        })?;
        relocate(located, spec.target.as_deref()).map_err(|source| Error::InvalidTarget {
            location: spec.location.clone(),
            trail: trail.chain(),
            source,
        })
    }

    fn strip_reserved_keys(&self, mut tree: ConfigNode) -> ConfigNode {
        if let Some(object) = tree.as_object_mut() {
            if object.remove(&self.options.parent_key).is_some() {
                debug!(key = %self.options.parent_key, "Removing parent key from imported config");
            }
            if let Some(import_key) = &self.options.import_key {
                if object.remove(import_key).is_some() {
                    debug!(key = %import_key, "Removing import key from imported config");
                }
            }
        }
        tree
    }

    /// Merge `tree` over each of its ancestors in turn, up to the root.
    ///
    /// Ancestors stay on the trail so that no ancestor can name a
    /// descendant as its parent.
    fn resolve_parents(&self, mut tree: ConfigNode, trail: &mut PathTrail) -> Result<ConfigNode> {
        loop {
            let parent_location = match tree
                .as_object_mut()
                .and_then(|object| object.remove(&self.options.parent_key))
            {
                Some(ConfigNode::String(location)) if !location.is_empty() => location,
                _ => return Ok(tree),
            };

            debug!(parent = %parent_location, "Inheriting");
            trail
                .try_append(&parent_location)
                .map_err(Error::circular_inheritance)?;

            let parent = self.read(&parent_location, trail)?;
            let mut parent = self.resolve_imports(parent, trail)?;
            merge(tree, &mut parent);
            tree = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySourceProvider;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolver(documents: &[(&str, &str)]) -> Resolver<MemorySourceProvider> {
        let provider = documents
            .iter()
            .fold(MemorySourceProvider::new(), |provider, (location, content)| {
                provider.with(*location, *content)
            });
        Resolver::new(provider)
    }

    #[test]
    fn test_child_overrides_parent() {
        let resolver = resolver(&[
            ("child.yml", "inherits: base.yml\nname: child\nopts:\n  a: 1\n"),
            ("base.yml", "name: base\nopts:\n  a: 0\n  b: 2\n"),
        ]);
        assert_eq!(
            resolver.resolve_tree("child.yml").unwrap(),
            json!({"name": "child", "opts": {"a": 1, "b": 2}})
        );
    }

    #[test]
    fn test_local_values_win_over_imports() {
        let resolver = resolver(&[
            ("app.yml", "import: defaults.yml\nport: 80\n"),
            ("defaults.yml", "port: 8080\nhost: localhost\n"),
        ]);
        assert_eq!(
            resolver.resolve_tree("app.yml").unwrap(),
            json!({"port": 80, "host": "localhost"})
        );
    }

    #[test]
    fn test_import_trail_is_restored_for_siblings() {
        let resolver = resolver(&[
            ("app.yml", "import: [a.yml, b.yml]\n"),
            ("a.yml", "import: shared.yml\na: 1\n"),
            ("b.yml", "import: shared.yml\nb: 1\n"),
            ("shared.yml", "shared: true\n"),
        ]);
        assert_eq!(
            resolver.resolve_tree("app.yml").unwrap(),
            json!({"a": 1, "b": 1, "shared": true})
        );
    }

    #[test]
    fn test_non_string_parent_is_terminal() {
        let resolver = resolver(&[("app.yml", "inherits: 3\nname: app\n")]);
        assert_eq!(resolver.resolve_tree("app.yml").unwrap(), json!({"name": "app"}));
    }

    #[test]
    fn test_imports_disabled_keeps_key() {
        let provider = MemorySourceProvider::new().with("app.yml", "import: other.yml\n");
        let resolver = Resolver::with_options(provider, ResolverOptions::new().without_imports());
        assert_eq!(
            resolver.resolve_tree("app.yml").unwrap(),
            json!({"import": "other.yml"})
        );
    }
}
