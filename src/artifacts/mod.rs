//! Value types and algorithms
//!
//! - `branch`: Branch and symbolic ref names
//! - `log`: Commit history traversal
//! - `objects`: Object ids, content hashing, file records, trees and commits
//! - `status`: Staging-relative working tree status

pub mod branch;
pub mod log;
pub mod objects;
pub mod status;
