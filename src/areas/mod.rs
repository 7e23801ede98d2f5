//! On-disk repository areas
//!
//! - `database`: Object store for trees and commits
//! - `index`: Staging area persisted between invocations
//! - `refs`: Branch references and HEAD
//! - `workspace`: Working tree scanning and file capture
//! - `config`: Repository identity and tracking settings
//! - `journal`: Append-only history log
//! - `repository`: Handle tying the areas together

pub mod config;
pub mod database;
pub mod index;
pub mod journal;
pub mod refs;
pub mod repository;
pub mod workspace;
