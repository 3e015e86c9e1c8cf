//! Persistence backends for studysets.

use crate::error::{Result, StoreError};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// File extension of persisted studysets.
pub const STUDYSET_EXTENSION: &str = "studyset";

/// Storage for serialized studysets, keyed by studyset name.
pub trait StudysetRepository {
    fn list_names(&self) -> Result<Vec<String>>;
    fn read(&self, name: &str) -> Result<String>;
    /// Create or truncate the studyset's backing storage and write `content`.
    fn write(&self, name: &str, content: &str) -> Result<()>;
    /// Remove the studyset's backing storage. Missing storage is not an error.
    fn delete(&self, name: &str) -> Result<()>;
}

/// One `<name>.studyset` file per studyset inside a directory.
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    dir: PathBuf,
}

impl DirectoryRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{STUDYSET_EXTENSION}"))
    }

    fn io_error(name: &str, source: io::Error) -> StoreError {
        StoreError::Io {
            name: name.to_string(),
            source,
        }
    }
}

impl StudysetRepository for DirectoryRepository {
    fn list_names(&self) -> Result<Vec<String>> {
        let listing_error = |source| StoreError::Listing {
            path: self.dir.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(listing_error)? {
            let path = entry.map_err(listing_error)?.path();

            if !path.is_file() || path.extension().map_or(true, |ext| ext != STUDYSET_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => tracing::warn!(path = %path.display(), "skipping studyset with non-UTF-8 name"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.path_for(name)).map_err(|e| Self::io_error(name, e))
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        fs::write(self.path_for(name), content).map_err(|e| Self::io_error(name, e))
    }

    fn delete(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path_for(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(name, e)),
        }
    }
}

/// In-memory repository for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    files: RefCell<BTreeMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with `(name, content)` pairs.
    pub fn with_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let repo = Self::new();
        repo.files
            .borrow_mut()
            .extend(files.into_iter().map(|(n, c)| (n.into(), c.into())));
        repo
    }

    pub fn contents(&self, name: &str) -> Option<String> {
        self.files.borrow().get(name).cloned()
    }

    /// Make every subsequent write fail, to exercise error reporting.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StudysetRepository for MemoryRepository {
    fn list_names(&self) -> Result<Vec<String>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read(&self, name: &str) -> Result<String> {
        self.contents(name).ok_or_else(|| StoreError::Io {
            name: name.to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn write(&self, name: &str, content: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Io {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        self.files
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<()> {
        self.files.borrow_mut().remove(name);
        Ok(())
    }
}
