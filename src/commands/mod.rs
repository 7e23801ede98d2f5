//! Repository operations
//!
//! Operations are methods on [`Repository`], split in two groups:
//!
//! - `plumbing`: Low-level object access (cat-file, hash-object)
//! - `porcelain`: User-facing workflow (init, add, commit, status, diff, log)
//!
//! Each operation returns plain data; a matching `show_*` method renders it to
//! the repository's writer for the CLI.
//!
//! [`Repository`]: crate::areas::repository::Repository

pub mod plumbing;
pub mod porcelain;
