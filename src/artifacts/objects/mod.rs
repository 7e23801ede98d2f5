//! Object types and content hashing
//!
//! Everything the repository stores is addressed by the SHA-256 of its bytes.
//! There are two stored object kinds, plus the record type they share:
//!
//! - **Tree**: Snapshot of the staging index (path -> file record)
//! - **Commit**: Tree reference, optional parent, signatures and message
//! - **File record**: Path, size, mtime and content hash of a working-tree file
//!
//! Objects are persisted as canonical JSON (compact, keys sorted), so the same
//! logical content always yields the same bytes and the same hash.

pub mod commit;
pub mod file_record;
pub mod hasher;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-256 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 64;

/// Number of leading hex characters used as the shard directory name
pub const SHARD_PREFIX_LENGTH: usize = 2;

/// Length of the abbreviated hash shown in one-line output
pub const SHORT_OBJECT_ID_LENGTH: usize = 8;
