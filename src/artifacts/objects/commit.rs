//! Commit object
//!
//! Commits link a tree snapshot to the commit that preceded it on a branch.
//! They contain:
//! - A tree object ID (staged snapshot)
//! - At most one parent commit ID (`null` for root commits)
//! - Author and committer signatures
//! - Commit message
//! - The commit's own hash
//!
//! ## Format
//!
//! On disk (canonical JSON, keys sorted):
//! ```text
//! {"author":{..},"committer":{..},"hash":"<sha>","message":"..","parent":null,"tree":"<sha>"}
//! ```
//!
//! The hash is computed over the canonical form *without* the `hash` key and
//! attached afterwards. It is always derived, never taken from the caller.

use crate::artifacts::objects::hasher;
use crate::artifacts::objects::object::{
    Object, Packable, Unpackable, canonical_json, canonical_value,
};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::SubsecRound;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

const HASH_KEY: &str = "hash";

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Signature {
    /// Create a new signature stamped with the current local time
    pub fn new(name: String, email: String) -> Self {
        Signature {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset().trunc_subsecs(0),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Signature {
            name,
            email,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Format author name and email for display
    ///
    /// # Returns
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

/// Commit object
///
/// Represents a sealed snapshot of the staging index with metadata.
/// Commits form a singly-linked list per branch through `parent`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Tree object ID representing the staged snapshot
    #[serde(rename = "tree")]
    tree_oid: ObjectId,
    /// Parent commit ID (None for root commits)
    parent: Option<ObjectId>,
    /// Author who wrote the changes
    author: Signature,
    /// Committer who recorded the commit
    committer: Signature,
    /// Commit message
    message: String,
    /// Hash over every other field
    hash: ObjectId,
}

impl Commit {
    /// Create a new commit and derive its hash
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent commit ID (None for a root commit)
    /// * `tree_oid` - Tree object representing the snapshot
    /// * `author` - Author signature
    /// * `committer` - Committer signature
    /// * `message` - Commit message
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Signature,
        committer: Signature,
        message: String,
    ) -> anyhow::Result<Self> {
        let mut commit = Commit {
            tree_oid,
            parent,
            author,
            committer,
            message,
            // placeholder, replaced below before the commit escapes
            hash: hasher::hash_bytes(&[]),
        };
        commit.hash = commit.compute_hash()?;

        Ok(commit)
    }

    /// Hash the canonical form of every field except `hash` itself
    pub fn compute_hash(&self) -> anyhow::Result<ObjectId> {
        let mut value = serde_json::to_value(self).context("Unable to convert commit to JSON")?;
        value
            .as_object_mut()
            .context("Commit did not serialize to a JSON object")?
            .remove(HASH_KEY);

        Ok(hasher::hash_bytes(&canonical_value(&value)?))
    }

    /// Check that the embedded hash matches the recomputed one
    pub fn verify_hash(&self) -> anyhow::Result<bool> {
        Ok(self.compute_hash()? == self.hash)
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `arvo log --oneline`)
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn author(&self) -> &Signature {
        &self.author
    }

    pub fn committer(&self) -> &Signature {
        &self.committer
    }

    pub fn hash(&self) -> &ObjectId {
        &self.hash
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.author.timestamp()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        canonical_json(self)
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Invalid commit object")
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("tree {}", self.tree_oid));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent));
        }
        lines.push(format!(
            "author {} {}",
            self.author.display_name(),
            self.author.timestamp().to_rfc3339()
        ));
        lines.push(format!(
            "committer {} {}",
            self.committer.display_name(),
            self.committer.timestamp().to_rfc3339()
        ));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }

    // The stored bytes embed the hash, so the id comes from the hash-less form.
    fn object_id(&self) -> anyhow::Result<ObjectId> {
        self.compute_hash()
    }
}
