//! Staging index
//!
//! The index is the staging area: it records which files, captured as file
//! records, will be sealed into the next commit. It survives between
//! invocations so `add` and `commit` can run in separate processes.
//!
//! ## Index File Format
//!
//! `.arvo/index` holds a JSON document:
//! ```text
//! {"files": {"<path>": {"hash": "...", "modified": "...", "path": "...", "size": 0}}}
//! ```
//!
//! Entries are upserted by `add` and removed all at once when a commit succeeds.
//! An entry whose file is deleted afterwards stays in the index until then.

use crate::artifacts::objects::file_record::FileRecord;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexDocument {
    #[serde(default)]
    files: BTreeMap<PathBuf, FileRecord>,
}

/// Staging index
///
/// Holds the staged file records in memory; `rehydrate` loads them from disk
/// and `write_updates` persists them back.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.arvo/index`)
    path: Box<Path>,
    /// Staged files mapped by repository-relative path
    entries: BTreeMap<PathBuf, FileRecord>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&FileRecord> {
        self.entries.get(path)
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file loads as an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read index file at {:?}", self.path))?;

        if content.trim().is_empty() {
            return Ok(());
        }

        let document = serde_json::from_str::<IndexDocument>(&content)
            .with_context(|| format!("invalid index file at {:?}", self.path))?;
        self.entries = document.files;

        Ok(())
    }

    /// Insert or replace the record staged for `record.path`
    pub fn add(&mut self, record: FileRecord) {
        self.entries.insert(record.path.clone(), record);
        self.changed = true;
    }

    /// Drop every staged entry
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.changed = true;
        }
    }

    /// Copy of the current staged set, leaving the index untouched
    pub fn snapshot(&self) -> BTreeMap<PathBuf, FileRecord> {
        self.entries.clone()
    }

    /// Persist the index
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let document = IndexDocument {
            files: self.entries.clone(),
        };
        let content =
            serde_json::to_vec_pretty(&document).context("failed to serialize index")?;

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        lock.deref_mut()
            .write_all(&content)
            .with_context(|| format!("failed to write index file at {:?}", self.path))?;
        self.changed = false;

        Ok(())
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn entries(&self) -> impl Iterator<Item = &FileRecord> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
