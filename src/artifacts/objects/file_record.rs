//! File record
//!
//! A file record captures a working-tree file at staging time: its
//! repository-relative path, size, modification time and content hash.
//! Records live in the staging index and, once committed, inside tree objects.

use crate::artifacts::objects::object_id::ObjectId;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct FileRecord {
    /// Path relative to the repository root, `/`-separated
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Last modification time of the file when it was captured
    #[serde(rename = "modified")]
    pub modified_time: DateTime<Utc>,
    /// SHA-256 of the file content
    #[serde(rename = "hash")]
    pub content_hash: ObjectId,
}

impl FileRecord {
    pub fn same_content(&self, other: &FileRecord) -> bool {
        self.content_hash == other.content_hash
    }
}
