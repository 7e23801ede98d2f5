use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileStatus;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::errors::Result;
use std::io::Write;

// Terminology:
// - staged files: index entries whose working-tree content still matches
// - modified files: tracked files never staged, or changed since staging
// - tracked files: working-tree files on the extension allow-list
impl Repository {
    pub fn status(&self) -> Result<StatusInfo> {
        self.ensure_initialized()?;

        let mut index = self.index();
        index.rehydrate()?;

        Ok(Status::new(self).initialize(&index)?)
    }

    pub fn show_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        match &status_info.branch {
            Some(branch) => writeln!(self.writer(), "On branch {}", branch)?,
            None => writeln!(self.writer(), "Not currently on any branch")?,
        }

        if !status_info.staged.is_empty() {
            writeln!(self.writer(), "Changes to be committed:")?;
            for file in status_info.staged.iter() {
                writeln!(self.writer(), "{}{}", FileStatus::Staged, file.display())?;
            }
            writeln!(self.writer())?;
        }

        if !status_info.modified.is_empty() {
            writeln!(self.writer(), "Changes not staged for commit:")?;
            for file in status_info.modified.iter() {
                writeln!(self.writer(), "{}{}", FileStatus::Modified, file.display())?;
            }
            writeln!(self.writer())?;
        }

        if status_info.staged_count == 0 && status_info.is_clean() {
            writeln!(self.writer(), "nothing to commit, working tree clean")?;
        }

        writeln!(
            self.writer(),
            "{} tracked, {} staged",
            status_info.tracked_count,
            status_info.staged_count
        )?;

        Ok(())
    }
}
