use crate::areas::config::Config;
use crate::areas::journal::JournalEntry;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Signature};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{RepositoryError, Result};
use chrono::{DateTime, FixedOffset};
use derive_new::new;
use std::io::Write;
use tracing::info;

const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_EMAIL: &str = "unknown@local";

/// Caller-supplied commit identity
///
/// Missing or empty fields fall back to the config's `user` section, then to
/// the unknown sentinel. A missing timestamp means "now".
#[derive(Debug, Clone, Default, new)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Identity {
    fn resolve(&self, config: &Config) -> Signature {
        let pick = |explicit: &Option<String>, configured: &str, fallback: &str| {
            explicit
                .as_deref()
                .filter(|value| !value.is_empty())
                .or(Some(configured).filter(|value| !value.is_empty()))
                .unwrap_or(fallback)
                .to_string()
        };

        let name = pick(&self.name, &config.user.name, UNKNOWN_NAME);
        let email = pick(&self.email, &config.user.email, UNKNOWN_EMAIL);

        match self.timestamp {
            Some(timestamp) => Signature::new_with_timestamp(name, email, timestamp),
            None => Signature::new(name, email),
        }
    }
}

impl Repository {
    /// Seal the staging index into a commit on the current branch
    ///
    /// Nothing is written when the index is empty.
    pub fn commit(&self, message: &str, identity: &Identity) -> Result<ObjectId> {
        let config = self.config()?;
        let branch = self.current_branch()?;

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            return Err(RepositoryError::EmptyStagingArea);
        }

        let parent = self.refs().read_ref(&branch)?;
        if let Some(parent) = &parent
            && !self.database().contains(parent)
        {
            return Err(RepositoryError::DanglingObjectReference(parent.clone()));
        }

        let tree = Tree::build(index.entries());
        let tree_oid = self.database().store(&tree)?;

        let author = identity.resolve(&config);
        let commit = Commit::new(
            parent,
            tree_oid,
            author.clone(),
            author.clone(),
            message.to_string(),
        )?;
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_ref(&branch, &commit_oid)?;

        let files_count = index.len();
        index.clear();
        index.write_updates()?;

        self.journal().append(&JournalEntry::commit(
            author.name(),
            commit.message(),
            commit_oid.clone(),
            files_count,
        ))?;

        info!(branch = %branch, oid = %commit_oid, files = files_count, "created commit");

        Ok(commit_oid)
    }

    pub fn show_commit(&self, commit_oid: &ObjectId) -> anyhow::Result<()> {
        let commit = self.database().parse_object_as_commit(commit_oid)?.ok_or_else(|| {
            RepositoryError::DanglingObjectReference(commit_oid.clone())
        })?;
        let branch = self.refs().current_branch()?;

        writeln!(
            self.writer(),
            "[{} {}] {}",
            branch.map(|branch| branch.to_string()).unwrap_or_default(),
            commit_oid.to_short_oid(),
            commit.short_message()
        )?;

        Ok(())
    }
}
