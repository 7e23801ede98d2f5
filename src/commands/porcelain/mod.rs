//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Create the control directory and the root commit
//! - `add`: Stage files for commit
//! - `commit`: Seal the staging index into a commit
//! - `status`: Classify working-tree files against the staging index
//! - `diff`: List files changed since they were staged
//! - `log`: Walk the current branch's history

pub mod add;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod status;
