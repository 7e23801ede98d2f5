//! Plumbing commands (low-level object access)
//!
//! - `cat_file`: Print a stored object by full or abbreviated hash
//! - `hash_object`: Content hash of a working-tree file

pub mod cat_file;
pub mod hash_object;
