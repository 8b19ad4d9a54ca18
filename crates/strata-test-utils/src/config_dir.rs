//! [`ConfigDir`] builder for resolver and CLI test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory of configuration documents.
///
/// # Example
///
/// ```rust
/// use strata_test_utils::ConfigDir;
///
/// let dir = ConfigDir::new()
///     .with("base.yml", "name: base\n")
///     .with("envs/child.yml", "inherits: base.yml\n");
/// dir.assert_file_exists("envs/child.yml");
/// ```
pub struct ConfigDir {
    temp_dir: TempDir,
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDir {
    /// Create an empty temporary directory.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("ConfigDir::new: failed to create temp dir: {e}")),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` under the root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Absolute path of `name` as a string, for use as a resolver location.
    pub fn location(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    /// Write `content` to `name`, creating parent directories as needed.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("ConfigDir::write: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("ConfigDir::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Builder form of [`write`](Self::write).
    pub fn with(self, name: &str, content: &str) -> Self {
        self.write(name, content);
        self
    }

    /// Assert that `name` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parents() {
        let dir = ConfigDir::new();
        let path = dir.write("a/b/c.yml", "x: 1\n");
        assert_eq!(fs::read_to_string(path).unwrap(), "x: 1\n");
        assert!(dir.location("a/b/c.yml").ends_with("c.yml"));
    }
}
