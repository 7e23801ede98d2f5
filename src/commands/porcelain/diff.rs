use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileStatus;
use crate::errors::Result;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Files whose working-tree content differs from the staging index
    ///
    /// This is the `modified` set of [`Repository::status`]: never-staged
    /// tracked files are included.
    pub fn diff(&self) -> Result<Vec<PathBuf>> {
        Ok(self.status()?.modified.into_iter().collect())
    }

    pub fn show_diff(&self, files: &[PathBuf]) -> anyhow::Result<()> {
        for file in files {
            writeln!(self.writer(), "{}{}", FileStatus::Modified, file.display())?;
        }

        Ok(())
    }
}
