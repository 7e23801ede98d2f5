use crate::artifacts::objects::file_record::FileRecord;
use crate::artifacts::objects::hasher;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 2] = [".arvo", ".git"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List every file under `root_file_path` (the whole working tree when None)
    ///
    /// Returned paths are relative to the repository root and sorted.
    pub fn list_files(&self, root_file_path: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        if !root_file_path.exists() {
            anyhow::bail!("The specified path does not exist: {:?}", root_file_path);
        }

        if root_file_path.is_dir() {
            let mut files = WalkDir::new(&root_file_path)
                .into_iter()
                .filter_entry(|entry| !Self::is_ignored_name(entry.file_name()))
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .filter_map(|entry| self.relative_path(entry.path()))
                .collect::<Vec<_>>();
            files.sort();

            Ok(files)
        } else {
            Ok(self.relative_path(&root_file_path).into_iter().collect())
        }
    }

    /// Turn a caller-supplied path into a repository-relative one
    ///
    /// Absolute paths must live under the repository root; `.` components
    /// are dropped.
    pub fn normalize(&self, path: &Path) -> anyhow::Result<PathBuf> {
        let path = if path.is_absolute() {
            path.strip_prefix(&self.path)
                .with_context(|| format!("{:?} is outside the repository", path))?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                _ => anyhow::bail!("{:?} is outside the repository", path),
            }
        }

        Ok(normalized)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }

    pub fn file_size(&self, file_path: &Path) -> anyhow::Result<u64> {
        let metadata = std::fs::metadata(self.path.join(file_path))
            .with_context(|| format!("Failed to get metadata for file: {:?}", file_path))?;

        Ok(metadata.len())
    }

    /// Stream a file's content through the hasher
    pub fn hash_file(&self, file_path: &Path) -> anyhow::Result<ObjectId> {
        let file = std::fs::File::open(self.path.join(file_path))
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        hasher::hash_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to hash file: {:?}", file_path))
    }

    /// Capture the current state of a working-tree file
    pub fn file_record(&self, file_path: &Path) -> anyhow::Result<FileRecord> {
        let metadata = std::fs::metadata(self.path.join(file_path))
            .with_context(|| format!("Failed to get metadata for file: {:?}", file_path))?;
        let modified_time = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .with_context(|| format!("Failed to read modification time of {:?}", file_path))?;

        Ok(FileRecord::new(
            file_path.to_path_buf(),
            metadata.len(),
            modified_time,
            self.hash_file(file_path)?,
        ))
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }

    /// Whether `path` lies inside a control directory
    pub fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => Self::is_ignored_name(name),
            _ => false,
        })
    }

    fn is_ignored_name(name: &std::ffi::OsStr) -> bool {
        let name = name.to_string_lossy();
        IGNORED_PATHS.contains(&name.as_ref())
    }
}
