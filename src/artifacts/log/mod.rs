//! Commit history traversal
//!
//! - `rev_list`: Lazy walk from a branch tip along parent pointers
//!
//! History is linear: every commit has at most one parent, so the walk is a
//! plain linked-list traversal from newest to oldest.

pub mod rev_list;
