//! Source providers turn a location string into a byte stream
//!
//! The resolver never interprets locations itself: a filesystem provider
//! reads paths, an in-memory provider serves embedded documents, and
//! callers can plug in their own (HTTP, archives, ...).

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opens documents by location
pub trait SourceProvider: Send + Sync {
    /// Open the document at `location` for reading.
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>>;
}

impl<T: SourceProvider + ?Sized> SourceProvider for &T {
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(location)
    }
}

impl<T: SourceProvider + ?Sized> SourceProvider for Box<T> {
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(location)
    }
}

impl<T: SourceProvider + ?Sized> SourceProvider for Arc<T> {
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(location)
    }
}

/// Reads documents from the local filesystem.
///
/// Relative locations are resolved against the base directory when one is
/// set, otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FileSourceProvider {
    base_dir: Option<PathBuf>,
}

impl FileSourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider resolving relative locations under `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn path_for(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl SourceProvider for FileSourceProvider {
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self.path_for(location))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Serves documents held in memory, keyed by location.
#[derive(Debug, Clone, Default)]
pub struct MemorySourceProvider {
    documents: HashMap<String, String>,
}

impl MemorySourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, location: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(location, content);
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(location.into(), content.into());
    }

    pub fn contains(&self, location: &str) -> bool {
        self.documents.contains_key(location)
    }
}

impl SourceProvider for MemorySourceProvider {
    fn open(&self, location: &str) -> io::Result<Box<dyn Read + '_>> {
        let content = self.documents.get(location).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document registered at '{location}'"),
            )
        })?;
        Ok(Box::new(Cursor::new(content.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_all(provider: &dyn SourceProvider, location: &str) -> io::Result<String> {
        let mut content = String::new();
        provider.open(location)?.read_to_string(&mut content)?;
        Ok(content)
    }

    #[test]
    fn test_memory_provider() {
        let provider = MemorySourceProvider::new().with("a.yml", "a: 1\n");
        assert_eq!(read_all(&provider, "a.yml").unwrap(), "a: 1\n");

        let err = read_all(&provider, "missing.yml").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_file_provider_base_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("conf")).unwrap();
        fs::write(temp.path().join("conf/app.yml"), "name: app\n").unwrap();

        let provider = FileSourceProvider::with_base_dir(temp.path());
        assert_eq!(read_all(&provider, "conf/app.yml").unwrap(), "name: app\n");

        let absolute = temp.path().join("conf/app.yml");
        let unrooted = FileSourceProvider::new();
        assert_eq!(
            read_all(&unrooted, absolute.to_str().unwrap()).unwrap(),
            "name: app\n"
        );
    }

    #[test]
    fn test_file_provider_missing_file() {
        let temp = TempDir::new().unwrap();
        let provider = FileSourceProvider::with_base_dir(temp.path());
        assert!(provider.open("nope.yml").is_err());
    }
}
