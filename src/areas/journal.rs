//! History journal
//!
//! Append-only, line-delimited JSON record of `init` and `commit` events
//! at `.arvo/logs/history.log`. The engine never reads it back.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalAction {
    Init,
    Commit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub action: JournalAction,
    pub message: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_hash: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_count: Option<usize>,
}

impl JournalEntry {
    pub fn init(user: &str) -> Self {
        JournalEntry {
            timestamp: Local::now(),
            action: JournalAction::Init,
            message: "Repository initialized".to_string(),
            user: user.to_string(),
            commit_hash: None,
            files_count: None,
        }
    }

    pub fn commit(user: &str, message: &str, commit_hash: ObjectId, files_count: usize) -> Self {
        JournalEntry {
            timestamp: Local::now(),
            action: JournalAction::Commit,
            message: message.to_string(),
            user: user.to_string(),
            commit_hash: Some(commit_hash),
            files_count: Some(files_count),
        }
    }
}

#[derive(Debug)]
pub struct Journal {
    path: Box<Path>,
}

impl Journal {
    pub fn new(path: Box<Path>) -> Self {
        Journal { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &JournalEntry) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {:?}", parent))?;
        }

        let mut line = serde_json::to_string(entry).context("failed to serialize journal entry")?;
        line.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open journal at {:?}", self.path))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to append to journal at {:?}", self.path))
    }

    /// Every entry recorded so far, oldest first
    pub fn entries(&self) -> anyhow::Result<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("failed to open journal at {:?}", self.path))?;

        std::io::BufReader::new(file)
            .lines()
            .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
            .map(|line| {
                let line = line.context("failed to read journal line")?;
                serde_json::from_str(&line).context("invalid journal entry")
            })
            .collect()
    }
}
