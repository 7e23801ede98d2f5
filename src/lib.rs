//! A minimal content-addressable version control engine
//!
//! Files are staged into an index, sealed into single-parent commits, and
//! tracked on named branches. Every stored object is addressed by the
//! SHA-256 of its canonical JSON bytes.
//!
//! All operations hang off [`Repository`]:
//!
//! ```no_run
//! use arvo::{Identity, Repository};
//!
//! # fn main() -> arvo::Result<()> {
//! let repository = Repository::new("project", Box::new(std::io::stdout()))?;
//! repository.init("Ann", "ann@x.io")?;
//! repository.add(["model.py"])?;
//! let oid = repository.commit("train baseline", &Identity::default())?;
//! # Ok(())
//! # }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;

pub use areas::repository::Repository;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::object_id::ObjectId;
pub use artifacts::status::status_info::StatusInfo;
pub use commands::porcelain::add::StageReport;
pub use commands::porcelain::commit::Identity;
pub use commands::porcelain::log::LogOptions;
pub use errors::{RepositoryError, Result};
