//! Working tree status inspection
//!
//! Status is staging-relative: working-tree files are compared against the
//! staging index only, never against the last commit's tree.
//!
//! ## Components
//!
//! - `file_change`: Classification of a single path
//! - `inspector`: Per-path comparison of index entry and working tree
//! - `status_info`: Aggregated status of the whole working tree

pub mod file_change;
pub mod inspector;
pub mod status_info;
