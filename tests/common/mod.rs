#![allow(dead_code)]

pub mod file;

use std::path::Path;

pub const CONTROL_DIR: &str = ".arvo";

/// Read the head commit hash of the current branch straight from disk
pub fn head_commit_oid(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_content = std::fs::read_to_string(dir.join(CONTROL_DIR).join("HEAD"))?;
    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD does not point to a branch")?;

    let oid = std::fs::read_to_string(dir.join(CONTROL_DIR).join(ref_path))?;
    Ok(oid.trim().to_string())
}

/// Paths of every stored object, relative to the objects directory
pub fn stored_objects(dir: &Path) -> Vec<String> {
    let objects = dir.join(CONTROL_DIR).join("objects");
    let mut found = walkdir::WalkDir::new(&objects)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(&objects)
                .ok()
                .map(|path| path.display().to_string())
        })
        .collect::<Vec<_>>();
    found.sort();
    found
}
