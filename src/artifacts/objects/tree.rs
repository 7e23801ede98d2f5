//! Tree object
//!
//! A tree is an immutable snapshot of the staging index at commit time: a flat
//! map from repository-relative path to the file record that was staged for it.
//!
//! ## Format
//!
//! On disk (canonical JSON, keys sorted):
//! ```text
//! {"files":{"a.txt":{"hash":"...","modified":"...","path":"a.txt","size":5}}}
//! ```
//!
//! Identical staged sets always serialize to identical bytes, and therefore to
//! the same tree hash, regardless of the order the files were staged in.

use crate::artifacts::objects::file_record::FileRecord;
use crate::artifacts::objects::object::{Object, Packable, Unpackable, canonical_json};
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    files: BTreeMap<PathBuf, FileRecord>,
}

impl Tree {
    /// Build a tree from staged file records
    ///
    /// Later records for the same path replace earlier ones.
    pub fn build<'r>(records: impl IntoIterator<Item = &'r FileRecord>) -> Self {
        let files = records
            .into_iter()
            .map(|record| (record.path.clone(), record.clone()))
            .collect();

        Tree { files }
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, FileRecord> {
        &self.files
    }

    pub fn entry(&self, path: &Path) -> Option<&FileRecord> {
        self.files.get(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        canonical_json(self)
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Invalid tree object")
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.files
            .values()
            .map(|record| {
                format!(
                    "{} {:>10} {}",
                    record.content_hash,
                    record.size,
                    record.path.display()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
