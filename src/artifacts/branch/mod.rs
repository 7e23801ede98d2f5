//! Branch names and symbolic references
//!
//! Only the default branch is ever created, but names read back from `HEAD`
//! are still validated with the usual ref-name rules.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name of the branch created by `init`
pub const DEFAULT_BRANCH: &str = "main";
