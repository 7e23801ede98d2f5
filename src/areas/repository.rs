//! Repository handle
//!
//! Every operation takes a [`Repository`]: it owns the paths of the on-disk
//! areas and the writer used by the presentation methods. There is no
//! process-wide repository state.

use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::journal::Journal;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the control directory at the repository root
pub const CONTROL_DIR: &str = ".arvo";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    journal: Journal,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Nothing is created on disk. A missing root is only made absolute;
    /// `init` creates it.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let path = if path.exists() {
            path.canonicalize()
        } else {
            std::path::absolute(path)
        }
        .with_context(|| format!("failed to resolve repository path {:?}", path))?;
        let control_path = path.join(CONTROL_DIR);

        let index = Index::new(control_path.join("index").into_boxed_path());
        let database = Database::new(control_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(control_path.clone().into_boxed_path());
        let journal = Journal::new(
            control_path
                .join("logs")
                .join("history.log")
                .into_boxed_path(),
        );

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            journal,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn config_path(&self) -> PathBuf {
        self.control_path().join("config")
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.control_path().join("metadata")
    }

    pub fn logs_path(&self) -> PathBuf {
        self.control_path().join("logs")
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// True once the control directory and its config both exist
    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir() && self.config_path().is_file()
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized(self.path.to_path_buf()))
        }
    }

    pub fn config(&self) -> Result<Config> {
        self.ensure_initialized()?;

        Ok(Config::load(&self.config_path())?)
    }

    /// Branch selected by HEAD
    pub fn current_branch(&self) -> Result<BranchName> {
        self.ensure_initialized()?;

        self.refs
            .current_branch()?
            .ok_or(RepositoryError::NoCurrentBranch)
    }

    /// Tip commit of the current branch
    pub fn head_commit(&self) -> Result<Option<ObjectId>> {
        let branch = self.current_branch()?;

        Ok(self.refs.read_ref(&branch)?)
    }
}
