use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::hasher;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::{Context, Result};
use bytes::Bytes;
use serde::Serialize;
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(hasher::hash_bytes(&content))
    }
}

pub enum ObjectBox {
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

/// Serialize a value as compact JSON with lexicographically sorted keys.
///
/// Going through `serde_json::Value` forces every map (struct fields included)
/// into key order, so equal values always produce identical bytes.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<Bytes> {
    let value = serde_json::to_value(value).context("Unable to convert object to JSON")?;
    canonical_value(&value)
}

pub fn canonical_value(value: &serde_json::Value) -> Result<Bytes> {
    let content = serde_json::to_vec(value).context("Unable to serialize object as JSON")?;
    Ok(Bytes::from(content))
}
