//! Error types surfaced by repository operations.
//!
//! Area code works in `anyhow::Result`; the operations on [`Repository`]
//! convert into [`RepositoryError`] so callers can match on the reason an
//! operation was refused.
//!
//! [`Repository`]: crate::areas::repository::Repository

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not an arvo repository: {0}. Run `arvo init` first.")]
    NotInitialized(PathBuf),

    #[error("Repository already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("File not found: {0}")]
    MissingWorkingTreeFile(PathBuf),

    #[error("Cannot read {path}: {reason}")]
    UnreadableWorkingTreeFile { path: PathBuf, reason: String },

    #[error("File too large to stage: {path} ({size} bytes, limit {limit} bytes)")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("No files staged for commit. Use `arvo add` first.")]
    EmptyStagingArea,

    #[error("HEAD does not point to a branch")]
    NoCurrentBranch,

    #[error("Object {0} is referenced but missing from the object store")]
    DanglingObjectReference(ObjectId),

    #[error("Object {oid} is malformed: {reason}")]
    SerializationMismatch { oid: ObjectId, reason: String },

    #[error("Invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Object id prefix {prefix} is ambiguous ({candidates} candidates)")]
    AmbiguousObjectId { prefix: String, candidates: usize },

    #[error(transparent)]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for RepositoryError {
    fn from(err: anyhow::Error) -> Self {
        // keep typed errors raised inside the areas
        match err.downcast::<RepositoryError>() {
            Ok(err) => err,
            Err(err) => RepositoryError::Storage(err),
        }
    }
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Storage(err.into())
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
