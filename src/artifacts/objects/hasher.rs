//! Content hashing
//!
//! One algorithm (SHA-256) is used for raw file content and for serialized
//! objects alike, so a digest always means the same thing wherever it appears.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::io::Read;

/// Hash an in-memory byte slice.
pub fn hash_bytes(data: &[u8]) -> ObjectId {
    let mut hasher = Sha256::new();
    hasher.update(data);

    ObjectId(format!("{:x}", hasher.finalize()))
}

/// Hash everything a reader yields, without buffering it whole.
pub fn hash_reader(mut reader: impl Read) -> anyhow::Result<ObjectId> {
    let mut hasher = Sha256::new();
    std::io::copy(&mut reader, &mut hasher).context("Unable to read content for hashing")?;

    Ok(ObjectId(format!("{:x}", hasher.finalize())))
}
