//! Property overrides collected from the command line or the environment
//!
//! Overrides are applied to the resolved tree just before binding, in the
//! order they were added. See [`strata_tree::overrides`] for key syntax.

use strata_tree::{ConfigNode, apply_override};

use crate::error::{Error, Result};

/// Default prefix selecting override variables, e.g. `strata.server.port`
pub const DEFAULT_OVERRIDE_PREFIX: &str = "strata";

/// An ordered list of `key=value` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOverrides {
    entries: Vec<(String, String)>,
}

impl PropertyOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Parse and add a `KEY=VALUE` pair.
    ///
    /// Only the first `=` separates key from value.
    pub fn push_pair(&mut self, input: &str) -> Result<()> {
        match input.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                self.push(key, value);
                Ok(())
            }
            _ => Err(Error::MalformedOverride {
                input: input.to_string(),
            }),
        }
    }

    /// Parse a list of `KEY=VALUE` pairs, e.g. repeated `--set` flags.
    pub fn parse<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::new();
        for pair in pairs {
            overrides.push_pair(pair.as_ref())?;
        }
        Ok(overrides)
    }

    /// Collect every `<prefix>.<key>` variable as an override of `<key>`.
    pub fn from_vars<I, K, V>(prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let prefix = format!("{prefix}.");
        let mut overrides = Self::new();
        for (name, value) in vars {
            if let Some(key) = name.as_ref().strip_prefix(&prefix) {
                if !key.is_empty() {
                    overrides.push(key, value);
                }
            }
        }
        overrides
    }

    /// Collect overrides from the process environment.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_vars(prefix, std::env::vars())
    }

    pub fn extend(&mut self, other: PropertyOverrides) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every override to `tree`, in order.
    pub fn apply(&self, tree: &mut ConfigNode) -> Result<()> {
        for (key, value) in &self.entries {
            tracing::debug!(key, value, "Applying override");
            apply_override(tree, key, value)?;
        }
        Ok(())
    }
}
