//! The chain of documents visited on the current resolution branch
//!
//! Every document is appended to the [`PathTrail`] before it is loaded, as
//! a parent or as an import. A location that is already on the trail means
//! the documents reference each other in a cycle.
//!
//! Import branches run inside a [`TrailScope`]: when the scope is dropped
//! the trail is restored, so sibling imports see the shared ancestor chain
//! but never each other's descendants. Dropping also happens on `?`
//! propagation, so no exit path can leave a branch's entries behind.

use std::fmt;
use std::ops::{Deref, DerefMut};

const SEPARATOR: &str = " -> ";

/// Ordered document locations, rendered as `a -> b -> c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain(Vec<String>);

impl Chain {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Chain {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Chain {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(SEPARATOR))
    }
}

/// A location was reached twice on the same branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// The document holding the repeated reference
    pub referrer: String,
    /// The trail, ending with the repeated location
    pub chain: Chain,
}

/// Opaque marker for a trail state, see [`PathTrail::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSnapshot(usize);

/// Documents currently being loaded, outermost first.
///
/// Scoped to a single resolution call.
#[derive(Debug, Clone, Default)]
pub struct PathTrail {
    entries: Vec<String>,
}

impl PathTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, location: impl Into<String>) {
        self.entries.push(location.into());
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.iter().any(|entry| entry == location)
    }

    /// Append `location` unless it is already on the trail.
    ///
    /// On a cycle the location is still appended so the returned chain
    /// shows the repetition.
    pub fn try_append(&mut self, location: &str) -> Result<(), Cycle> {
        if self.contains(location) {
            let referrer = self.last().unwrap_or_default().to_string();
            self.append(location);
            return Err(Cycle {
                referrer,
                chain: self.chain(),
            });
        }
        self.append(location);
        Ok(())
    }

    pub fn snapshot(&self) -> TrailSnapshot {
        TrailSnapshot(self.entries.len())
    }

    /// Return to the state captured by `snapshot`.
    ///
    /// Entries are only ever appended between a snapshot and its restore,
    /// so truncating is enough.
    pub fn restore(&mut self, snapshot: TrailSnapshot) {
        self.entries.truncate(snapshot.0);
    }

    /// Open a branch that restores the current state when dropped.
    pub fn scope(&mut self) -> TrailScope<'_> {
        let snapshot = self.snapshot();
        TrailScope {
            trail: self,
            snapshot,
        }
    }

    /// Render the trail behind a message prefix.
    pub fn render(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.entries.join(SEPARATOR))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn chain(&self) -> Chain {
        Chain(self.entries.clone())
    }

    /// The trail ending with `location`, appended only if it is not already
    /// the last entry.
    pub fn chain_with(&self, location: &str) -> Chain {
        let mut entries = self.entries.clone();
        if entries.last().map(String::as_str) != Some(location) {
            entries.push(location.to_string());
        }
        Chain(entries)
    }
}

/// A branch of the trail, restored on drop.
#[derive(Debug)]
pub struct TrailScope<'a> {
    trail: &'a mut PathTrail,
    snapshot: TrailSnapshot,
}

impl Deref for TrailScope<'_> {
    type Target = PathTrail;

    fn deref(&self) -> &PathTrail {
        self.trail
    }
}

impl DerefMut for TrailScope<'_> {
    fn deref_mut(&mut self) -> &mut PathTrail {
        self.trail
    }
}

impl Drop for TrailScope<'_> {
    fn drop(&mut self) {
        self.trail.restore(self.snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let mut trail = PathTrail::new();
        trail.append("a.yml");
        trail.append("b.yml");
        assert_eq!(trail.render("Circular import: "), "Circular import: a.yml -> b.yml");
        assert_eq!(PathTrail::new().render("empty: "), "empty: ");
    }

    #[test]
    fn test_try_append_detects_cycle() {
        let mut trail = PathTrail::new();
        trail.try_append("a.yml").unwrap();
        trail.try_append("b.yml").unwrap();

        let cycle = trail.try_append("a.yml").unwrap_err();
        assert_eq!(cycle.referrer, "b.yml");
        assert_eq!(cycle.chain.to_string(), "a.yml -> b.yml -> a.yml");
    }

    #[test]
    fn test_snapshot_restore() {
        let mut trail = PathTrail::new();
        trail.append("a");
        let snapshot = trail.snapshot();
        trail.append("b");
        trail.append("c");
        trail.restore(snapshot);
        assert_eq!(trail.entries(), ["a"]);
    }

    #[test]
    fn test_scope_restores_on_drop() {
        let mut trail = PathTrail::new();
        trail.append("root");
        {
            let mut branch = trail.scope();
            branch.append("import");
            assert!(branch.contains("import"));
            {
                let mut nested = branch.scope();
                nested.append("nested");
                assert_eq!(nested.len(), 3);
            }
            assert_eq!(branch.entries(), ["root", "import"]);
        }
        assert_eq!(trail.entries(), ["root"]);
    }

    #[test]
    fn test_scope_restores_on_error_path() {
        fn failing(trail: &mut PathTrail) -> Result<(), Cycle> {
            let mut branch = trail.scope();
            branch.try_append("x")?;
            branch.try_append("x")?;
            Ok(())
        }

        let mut trail = PathTrail::new();
        trail.append("root");
        assert!(failing(&mut trail).is_err());
        assert_eq!(trail.entries(), ["root"]);
    }

    #[test]
    fn test_chain_with_does_not_duplicate_last() {
        let mut trail = PathTrail::new();
        trail.append("a");
        assert_eq!(trail.chain_with("a").to_string(), "a");
        assert_eq!(trail.chain_with("b").to_string(), "a -> b");
    }
}
