use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Content hash of a working-tree file; nothing is stored
    pub fn hash_object(&self, object_path: impl AsRef<Path>) -> Result<ObjectId> {
        let object_path = object_path.as_ref();
        let relative = self
            .workspace()
            .normalize(object_path)
            .map_err(|_| RepositoryError::MissingWorkingTreeFile(object_path.to_path_buf()))?;

        if !self.workspace().is_file(&relative) {
            return Err(RepositoryError::MissingWorkingTreeFile(relative));
        }

        Ok(self.workspace().hash_file(&relative)?)
    }

    pub fn show_object_id(&self, object_id: &ObjectId) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
