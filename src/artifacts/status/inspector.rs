use crate::areas::repository::Repository;
use crate::artifacts::objects::file_record::FileRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileStatus;
use derive_new::new;
use std::path::Path;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Current content hash of a working-tree file, None if it is gone
    pub fn current_hash(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        let workspace = self.repository.workspace();

        if workspace.is_file(path) {
            Ok(Some(workspace.hash_file(path)?))
        } else {
            Ok(None)
        }
    }

    /// Classify a path from its staged record and its current content hash
    ///
    /// A staged entry whose file was deleted stays staged: the index keeps
    /// it until the next commit.
    pub fn check_index_against_workspace(
        &self,
        entry: Option<&FileRecord>,
        current_hash: Option<&ObjectId>,
    ) -> Option<FileStatus> {
        classify(entry, current_hash)
    }
}

pub(crate) fn classify(
    entry: Option<&FileRecord>,
    current_hash: Option<&ObjectId>,
) -> Option<FileStatus> {
    match (entry, current_hash) {
        (Some(entry), Some(hash)) if entry.content_hash == *hash => Some(FileStatus::Staged),
        (Some(_), Some(_)) => Some(FileStatus::Modified),
        (Some(_), None) => Some(FileStatus::Staged),
        (None, Some(_)) => Some(FileStatus::Modified),
        (None, None) => None,
    }
}
