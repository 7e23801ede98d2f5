use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::FileStatus;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type FileSet = BTreeSet<PathBuf>;
pub type ChangeSet = BTreeMap<PathBuf, FileStatus>;

/// Snapshot of the working tree relative to the staging index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    /// Current branch, None when HEAD does not name one
    pub branch: Option<BranchName>,
    /// Index entries still matching the working tree
    pub staged: FileSet,
    /// Tracked files that are unstaged or changed since staging
    pub modified: FileSet,
    /// Working-tree files on the tracked-extension allow-list
    pub tracked_count: usize,
    /// Entries in the staging index
    pub staged_count: usize,
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);
        let config = self.repository.config()?;

        let tracked_files = self
            .repository
            .workspace()
            .list_files(None)?
            .into_iter()
            .filter(|path| config.tracking.is_tracked(path))
            .collect::<FileSet>();

        let mut changeset = ChangeSet::new();

        for path in tracked_files.iter() {
            let current_hash = inspector.current_hash(path)?;
            if let Some(status) = inspector
                .check_index_against_workspace(index.entry_by_path(path), current_hash.as_ref())
            {
                changeset.insert(path.clone(), status);
            }
        }

        // explicitly staged files outside the allow-list
        for entry in index.entries() {
            if tracked_files.contains(&entry.path) {
                continue;
            }

            let current_hash = inspector.current_hash(&entry.path)?;
            if let Some(status) =
                inspector.check_index_against_workspace(Some(entry), current_hash.as_ref())
            {
                changeset.insert(entry.path.clone(), status);
            }
        }

        let (staged, modified) = Self::split_changeset(changeset);

        Ok(StatusInfo {
            branch: self.repository.refs().current_branch()?,
            staged,
            modified,
            tracked_count: tracked_files.len(),
            staged_count: index.len(),
        })
    }

    fn split_changeset(changeset: ChangeSet) -> (FileSet, FileSet) {
        let mut staged = FileSet::new();
        let mut modified = FileSet::new();

        for (path, status) in changeset {
            match status {
                FileStatus::Staged => staged.insert(path),
                FileStatus::Modified => modified.insert(path),
            };
        }

        (staged, modified)
    }
}
