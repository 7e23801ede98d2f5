//! Object store
//!
//! Immutable, content-addressed storage for tree and commit objects. Each
//! object lives in `.arvo/objects/<first-2-hex>/<remaining-62-hex>` and holds
//! the object's canonical serialized bytes.
//!
//! The store is append-only: objects are written once and never mutated or
//! deleted. `put` does not check that the hash it is given matches the bytes;
//! callers derive the hash through [`Object::object_id`] before storing.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::RepositoryError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Persist `content` under `object_id`
    ///
    /// Writing an id that is already present is a no-op.
    pub fn put(&self, object_id: &ObjectId, content: Bytes) -> anyhow::Result<()> {
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            trace!(oid = %object_id, "object already stored");
            return Ok(());
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(object_path, content)
    }

    /// Read the raw bytes stored under `object_id`
    ///
    /// # Returns
    ///
    /// `None` when no such object exists
    pub fn get(&self, object_id: &ObjectId) -> anyhow::Result<Option<Bytes>> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(Some(Bytes::from(content))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(format!(
                "Unable to read object file {}",
                object_path.display()
            )),
        }
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        self.get(object_id)?
            .ok_or_else(|| RepositoryError::DanglingObjectReference(object_id.clone()).into())
    }

    /// Serialize, hash and store an object
    ///
    /// # Returns
    ///
    /// The object's id
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        self.put(&object_id, object.serialize()?)?;

        Ok(object_id)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<Option<ObjectBox>> {
        let Some(content) = self.get(object_id)? else {
            return Ok(None);
        };

        let value = serde_json::from_slice::<serde_json::Value>(&content)
            .map_err(|err| Self::mismatch(object_id, err))?;

        match ObjectType::detect(&value).map_err(|err| Self::mismatch(object_id, err))? {
            ObjectType::Tree => Ok(Some(ObjectBox::Tree(Box::new(
                self.decode_tree(object_id, content)?,
            )))),
            ObjectType::Commit => Ok(Some(ObjectBox::Commit(Box::new(
                self.decode_commit(object_id, content)?,
            )))),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> anyhow::Result<Option<Tree>> {
        match self.get(object_id)? {
            Some(content) => Ok(Some(self.decode_tree(object_id, content)?)),
            None => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.get(object_id)? {
            Some(content) => Ok(Some(self.decode_commit(object_id, content)?)),
            None => Ok(None),
        }
    }

    fn decode_tree(&self, object_id: &ObjectId, content: Bytes) -> anyhow::Result<Tree> {
        Tree::deserialize(Cursor::new(content)).map_err(|err| Self::mismatch(object_id, err))
    }

    fn decode_commit(&self, object_id: &ObjectId, content: Bytes) -> anyhow::Result<Commit> {
        let commit =
            Commit::deserialize(Cursor::new(content)).map_err(|err| Self::mismatch(object_id, err))?;

        if commit.hash() != object_id || !commit.verify_hash()? {
            return Err(Self::mismatch(
                object_id,
                format!("embedded hash {} does not match content", commit.hash()),
            ));
        }

        Ok(commit)
    }

    fn mismatch(object_id: &ObjectId, reason: impl std::fmt::Display) -> anyhow::Error {
        RepositoryError::SerializationMismatch {
            oid: object_id.clone(),
            reason: format!("{reason:#}"),
        }
        .into()
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose id starts with the given prefix.
    ///
    /// Used to resolve abbreviated ids (as printed by `log --oneline`) to
    /// their full form. Returns every match, so more than one result means the
    /// prefix is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        let dirs = if prefix.len() >= 2 {
            vec![prefix[..2].to_string()]
        } else {
            (0..=255).map(|i| format!("{:02x}", i)).collect()
        };

        for dir_name in dirs {
            let dir_path = self.path.join(&dir_name);
            if !dir_path.is_dir() {
                continue;
            }

            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let full_oid = format!("{}{}", dir_name, entry.file_name().to_string_lossy());

                if full_oid.starts_with(prefix)
                    && let Ok(oid) = ObjectId::try_parse(full_oid)
                {
                    matches.push(oid);
                }
            }
        }

        Ok(matches)
    }
}
