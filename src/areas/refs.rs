//! Branch references and HEAD
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>`, each holding the hash of its tip commit
//! - HEAD: a symbolic reference selecting the current branch
//!
//! ## File Format
//!
//! - A branch file contains a 64-character commit hash
//! - HEAD contains `ref: refs/heads/<name>`
//!
//! A detached HEAD (raw hash in HEAD) is not modelled: such a HEAD has no
//! current branch.

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch reference store
///
/// Reads and writes HEAD and branch files under the control directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.arvo`)
    path: Box<Path>,
}

impl Refs {
    /// Resolve HEAD to the current branch
    ///
    /// # Returns
    ///
    /// None when HEAD is missing, empty or not a `refs/heads/` symbolic ref
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        let Some(content) = self.read_ref_file(&self.head_path())? else {
            return Ok(None);
        };

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(&content);
        match symref_match {
            Some(symref_match) => {
                let sym_ref_name = SymRefName::new(symref_match[1].to_string());
                Ok(BranchName::try_parse_sym_ref_name(&sym_ref_name).ok())
            }
            None => Ok(None),
        }
    }

    /// Point HEAD at `branch_name`
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let sym_ref_name = SymRefName::from(branch_name);

        self.update_ref_file(
            &self.head_path(),
            format!("ref: {}", sym_ref_name.as_ref_path()),
        )
    }

    /// Tip commit of the branch HEAD points to
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.current_branch()? {
            Some(branch_name) => self.read_ref(&branch_name),
            None => Ok(None),
        }
    }

    /// Tip commit of `branch_name`
    ///
    /// # Returns
    ///
    /// None when the branch file does not exist or is empty
    pub fn read_ref(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);

        match self.read_ref_file(&ref_path)? {
            Some(content) => Ok(Some(ObjectId::try_parse(content).with_context(|| {
                format!("branch {} holds an invalid commit hash", branch_name)
            })?)),
            None => Ok(None),
        }
    }

    /// Move `branch_name` to `oid`, creating the branch file if needed
    ///
    /// # Locking
    ///
    /// Acquires exclusive lock on the reference file during update.
    pub fn update_ref(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref().to_string())
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(content.to_string()))
        }
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(SymRefName::from(branch_name).as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
