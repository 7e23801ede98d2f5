use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use std::io::Write;

impl Repository {
    /// Resolve a full or abbreviated hash to a stored object id
    pub fn resolve_object_id(&self, object_id: &str) -> Result<ObjectId> {
        self.ensure_initialized()?;

        let is_hex = object_id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if object_id.is_empty() || object_id.len() > OBJECT_ID_LENGTH || !is_hex {
            return Err(RepositoryError::InvalidObjectId(object_id.to_string()));
        }

        if object_id.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(object_id.to_string())
                .map_err(|_| RepositoryError::InvalidObjectId(object_id.to_string()));
        }

        let mut candidates = self.database().find_objects_by_prefix(object_id)?;
        match candidates.len() {
            0 => Err(RepositoryError::InvalidObjectId(object_id.to_string())),
            1 => Ok(candidates.remove(0)),
            n => Err(RepositoryError::AmbiguousObjectId {
                prefix: object_id.to_string(),
                candidates: n,
            }),
        }
    }

    /// Raw persisted bytes of an object
    pub fn cat_file(&self, object_id: &str) -> Result<Bytes> {
        let object_id = self.resolve_object_id(object_id)?;

        Ok(self.database().load(&object_id)?)
    }

    pub fn show_object(&self, object_id: &str, pretty: bool) -> anyhow::Result<()> {
        if !pretty {
            let content = self.cat_file(object_id)?;
            self.writer().write_all(&content)?;
            writeln!(self.writer())?;
            return Ok(());
        }

        let object_id = self.resolve_object_id(object_id)?;
        let object = self
            .database()
            .parse_object(&object_id)?
            .ok_or_else(|| RepositoryError::DanglingObjectReference(object_id.clone()))?;

        let display = match object {
            ObjectBox::Tree(tree) => tree.display(),
            ObjectBox::Commit(commit) => commit.display(),
        };
        writeln!(self.writer(), "{}", display)?;

        Ok(())
    }
}
