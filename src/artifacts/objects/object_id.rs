//! Object identifier (SHA-256 hash)
//!
//! Object IDs are 64-character lowercase hexadecimal strings representing SHA-256 hashes.
//! They identify file contents inside file records as well as stored tree and commit objects.
//!
//! ## Format
//!
//! - Full: 64 hex characters (e.g., "2cf24d...9824")
//! - Short: First 8 characters (e.g., "2cf24dba")
//!
//! ## Storage
//!
//! Objects are stored in `.arvo/objects/<first-2-chars>/<remaining-62-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHARD_PREFIX_LENGTH, SHORT_OBJECT_ID_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content-derived object identifier
///
/// Validated on construction, so every `ObjectId` in memory is a well-formed digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(pub(super) String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 64-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the shard prefix.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(SHARD_PREFIX_LENGTH);
        PathBuf::from(dir).join(file)
    }

    pub fn to_short_oid(&self) -> String {
        self.0.split_at(SHORT_OBJECT_ID_LENGTH).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(value: ObjectId) -> Self {
        value.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
