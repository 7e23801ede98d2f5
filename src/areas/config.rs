//! Repository configuration
//!
//! `.arvo/config` is a pretty-printed JSON document holding the repository
//! identity and the tracking settings used by `add` and `status`. Missing
//! keys fall back to their defaults, so a hand-trimmed config still loads.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions tracked by default (artifact-heavy project layouts)
pub const DEFAULT_TRACKED_EXTENSIONS: [&str; 21] = [
    ".py", ".ipynb", ".json", ".yaml", ".yml", ".txt", ".md", ".pkl", ".joblib", ".h5", ".hdf5",
    ".pb", ".onnx", ".pt", ".pth", ".csv", ".tsv", ".parquet", ".feather", ".npy", ".npz",
];

/// Repository configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub user: UserConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default = "default_format_version")]
    pub repository_format_version: String,

    #[serde(default = "default_false")]
    pub file_mode: String,

    #[serde(default = "default_false")]
    pub bare: String,
}

/// Identity used when a commit does not name its author
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Extensions picked up by directory expansion and `status`
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Largest file `add` accepts (bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_format_version() -> String {
    "1".to_string()
}

fn default_false() -> String {
    "false".to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_TRACKED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_max_file_size() -> u64 {
    100 * 1024 * 1024 // 100 MiB
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            repository_format_version: default_format_version(),
            file_mode: default_false(),
            bare: default_false(),
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl TrackingConfig {
    /// Whether `path`'s final extension is on the allow-list (case-insensitive)
    pub fn is_tracked(&self, path: &Path) -> bool {
        let Some(extension) = path.extension() else {
            return false;
        };
        let extension = format!(".{}", extension.to_string_lossy());

        self.extensions
            .iter()
            .any(|tracked| tracked.eq_ignore_ascii_case(&extension))
    }
}

impl Config {
    pub fn with_user(name: &str, email: &str) -> Self {
        Config {
            user: UserConfig {
                name: name.to_string(),
                email: email.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {:?}", path))?;

        serde_json::from_str(&content).with_context(|| format!("invalid config file at {:?}", path))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self).context("failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file at {:?}", path))
    }
}
