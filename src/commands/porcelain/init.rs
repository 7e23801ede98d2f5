use crate::areas::config::Config;
use crate::areas::journal::JournalEntry;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::{Commit, Signature};
use crate::artifacts::objects::tree::Tree;
use crate::errors::{RepositoryError, Result};
use anyhow::Context;
use std::fs;
use std::io::Write;
use tracing::{info, warn};

const SYSTEM_NAME: &str = "arvo";
const SYSTEM_EMAIL: &str = "arvo@local";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

impl Repository {
    /// Create the control directory, the default branch and its root commit
    ///
    /// # Returns
    ///
    /// `false` when the repository was already initialized; nothing is
    /// touched in that case.
    pub fn init(&self, user_name: &str, user_email: &str) -> Result<bool> {
        if self.is_initialized() {
            warn!("{}", RepositoryError::AlreadyInitialized(self.path().to_path_buf()));
            return Ok(false);
        }

        for dir in [
            self.path().to_path_buf(),
            self.database().objects_path().to_path_buf(),
            self.refs().heads_path().to_path_buf(),
            self.logs_path(),
            self.metadata_path(),
        ] {
            fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;
        }

        let branch = BranchName::default_branch();
        self.refs()
            .set_head(&branch)
            .context("Failed to create initial HEAD reference")?;

        {
            let mut index = self.index();
            index.clear();
            index
                .write_updates()
                .context("Failed to create the index file")?;
        }

        let tree_oid = self.database().store(&Tree::default())?;
        let system = Signature::new(SYSTEM_NAME.to_string(), SYSTEM_EMAIL.to_string());
        let commit = Commit::new(
            None,
            tree_oid,
            system.clone(),
            system,
            INITIAL_COMMIT_MESSAGE.to_string(),
        )?;
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_ref(&branch, &commit_oid)?;

        let user = if user_name.is_empty() { "Unknown" } else { user_name };
        self.journal().append(&JournalEntry::init(user))?;

        // the config file marks the repository as initialized, so it goes last
        Config::with_user(user_name, user_email).save(&self.config_path())?;

        info!(path = %self.path().display(), root = %commit_oid, "initialized repository");

        Ok(true)
    }

    pub fn show_init(&self, created: bool) -> anyhow::Result<()> {
        if created {
            writeln!(
                self.writer(),
                "Initialized empty arvo repository in {}",
                self.control_path().display()
            )?;
        } else {
            writeln!(
                self.writer(),
                "Reinitialization skipped: arvo repository already exists in {}",
                self.control_path().display()
            )?;
        }

        Ok(())
    }
}
