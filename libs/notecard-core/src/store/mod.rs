//! In-memory registry of studysets backed by a repository.

mod repository;

pub use repository::{DirectoryRepository, MemoryRepository, StudysetRepository, STUDYSET_EXTENSION};

use crate::error::{Result, StoreError};
use crate::parser;
use crate::types::Studyset;
use std::collections::{BTreeMap, BTreeSet};

/// Summary of a [`Store::load`] pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped_lines: usize,
    pub unreadable: Vec<String>,
}

/// Check that a studyset name maps to exactly one file.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// All known studysets, keyed by name.
///
/// The store performs no uniqueness check; callers decide whether a name is
/// free before adding.
pub struct Store<R> {
    repository: R,
    studysets: BTreeMap<String, Studyset>,
    removed: BTreeSet<String>,
    unreadable: BTreeSet<String>,
}

impl<R: StudysetRepository> Store<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            studysets: BTreeMap::new(),
            removed: BTreeSet::new(),
            unreadable: BTreeSet::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn add_studyset(&mut self, set: Studyset) {
        self.removed.remove(set.name());
        self.studysets.insert(set.name().to_string(), set);
    }

    pub fn get_studyset(&self, name: &str) -> Option<&Studyset> {
        self.studysets.get(name)
    }

    pub fn get_studyset_mut(&mut self, name: &str) -> Option<&mut Studyset> {
        self.studysets.get_mut(name)
    }

    /// Remove a studyset. Its backing file is deleted on the next save.
    pub fn remove_studyset(&mut self, name: &str) -> Option<Studyset> {
        let removed = self.studysets.remove(name)?;
        self.removed.insert(name.to_string());
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.studysets.contains_key(name)
    }

    /// Whether `name` is held in memory or backs a file that failed to load.
    /// Files that failed to load are never overwritten.
    pub fn is_taken(&self, name: &str) -> bool {
        self.contains(name) || self.unreadable.contains(name)
    }

    /// Studyset names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.studysets.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.studysets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studysets.is_empty()
    }

    /// Read every persisted studyset into memory.
    ///
    /// Malformed lines are skipped, and files that cannot be read are left
    /// out; both are logged and counted in the report.
    pub fn load(&mut self) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for name in self.repository.list_names()? {
            if let Err(err) = validate_name(&name) {
                tracing::warn!(%err, "skipping studyset file");
                self.unreadable.insert(name.clone());
                report.unreadable.push(name);
                continue;
            }

            let content = match self.repository.read(&name) {
                Ok(content) => content,
                Err(err) => {
                    tracing::warn!(%err, "skipping unreadable studyset");
                    self.unreadable.insert(name.clone());
                    report.unreadable.push(name);
                    continue;
                }
            };

            let parsed = parser::parse(&content);
            for skipped in &parsed.skipped {
                tracing::warn!(studyset = %name, %skipped, "skipping malformed line");
            }
            report.skipped_lines += parsed.skipped.len();
            report.loaded += 1;

            self.studysets
                .insert(name.clone(), Studyset::with_cards(name, parsed.cards));
        }

        tracing::info!(
            loaded = report.loaded,
            skipped_lines = report.skipped_lines,
            unreadable = report.unreadable.len(),
            "loaded studysets"
        );
        Ok(report)
    }

    /// Rewrite every studyset's backing file and delete files of removed sets.
    ///
    /// Every set is attempted; the first failure is returned.
    pub fn save(&mut self) -> Result<()> {
        let mut first_error = None;

        for name in std::mem::take(&mut self.removed) {
            if let Err(err) = self.repository.delete(&name) {
                tracing::error!(%err, "failed to delete studyset");
                self.removed.insert(name);
                first_error.get_or_insert(err);
            }
        }

        for set in self.studysets.values() {
            if self.unreadable.contains(set.name()) {
                tracing::warn!(studyset = set.name(), "not overwriting studyset that failed to load");
                continue;
            }
            if let Err(err) = self.repository.write(set.name(), &parser::format_studyset(set)) {
                tracing::error!(%err, "failed to save studyset");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                tracing::info!(studysets = self.studysets.len(), "saved studysets");
                Ok(())
            }
        }
    }
}
