use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Infer the object type from the top-level keys of a stored object.
    ///
    /// Trees carry a `files` map, commits a `tree` reference.
    pub fn detect(value: &Value) -> anyhow::Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("Stored object is not a JSON object"))?;

        if object.contains_key("tree") {
            Ok(ObjectType::Commit)
        } else if object.contains_key("files") {
            Ok(ObjectType::Tree)
        } else {
            Err(anyhow::anyhow!("Unknown object type"))
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
