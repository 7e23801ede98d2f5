use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// History of the current branch, newest first
    ///
    /// The returned list is lazy: commits are read as it is iterated.
    pub fn log(&self) -> Result<RevList<'_>> {
        let branch = self.current_branch()?;

        self.log_branch(&branch)
    }

    /// History of the named branch, newest first
    ///
    /// A branch without a ref yields an empty list.
    pub fn log_branch(&self, branch: &BranchName) -> Result<RevList<'_>> {
        self.ensure_initialized()?;
        let head = self.refs().read_ref(branch)?;

        Ok(RevList::new(self.database(), head))
    }

    pub fn show_log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let rev_list = self.log()?;
        let mut commits = rev_list.iter();

        for commit in commits.by_ref() {
            self.display_commit(&commit, opts)?;
        }

        if let Some(truncation) = commits.truncation() {
            writeln!(
                self.writer(),
                "{} history truncated at {}: {}",
                "warning:".yellow(),
                truncation.commit_oid,
                truncation.reason
            )?;
        }

        Ok(())
    }

    pub fn display_commit(&self, commit: &Commit, opts: &LogOptions) -> anyhow::Result<()> {
        if opts.oneline {
            self.show_commit_oneline(commit)
        } else {
            self.show_commit_medium(commit)
        }
    }

    fn show_commit_medium(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.hash()).yellow()
        )?;
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.hash().to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
