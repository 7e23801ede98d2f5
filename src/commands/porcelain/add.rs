use crate::areas::config::Config;
use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::file_record::FileRecord;
use crate::errors::{RepositoryError, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of staging a batch of paths
///
/// Staging never fails as a whole because of a single bad path; such paths
/// end up in `skipped` with the reason they were refused.
#[derive(Debug, Default)]
pub struct StageReport {
    pub staged: BTreeMap<PathBuf, FileRecord>,
    pub skipped: Vec<RepositoryError>,
}

impl StageReport {
    fn skip(&mut self, reason: RepositoryError) {
        warn!(%reason, "skipping path");
        self.skipped.push(reason);
    }
}

impl Repository {
    /// Capture files into the staging index
    ///
    /// Directories expand to the files on the tracked-extension allow-list;
    /// an explicitly named file is staged whatever its extension.
    pub fn add<P: AsRef<Path>>(&self, paths: impl IntoIterator<Item = P>) -> Result<StageReport> {
        let config = self.config()?;

        let mut index = self.index();
        index.rehydrate()?;

        let mut report = StageReport::default();

        for path in paths {
            let path = path.as_ref();
            let relative = match self.workspace().normalize(path) {
                Ok(relative) if !Workspace::is_ignored(&relative) => relative,
                _ => {
                    report.skip(RepositoryError::MissingWorkingTreeFile(path.to_path_buf()));
                    continue;
                }
            };

            if self.workspace().is_dir(&relative) {
                let files = match self.workspace().list_files(Some(&relative)) {
                    Ok(files) => files,
                    Err(err) => {
                        report.skip(unreadable(&relative, err));
                        continue;
                    }
                };

                for file in files
                    .into_iter()
                    .filter(|file| config.tracking.is_tracked(file))
                {
                    self.stage_file(&file, &config, &mut index, &mut report);
                }
            } else if self.workspace().is_file(&relative) {
                self.stage_file(&relative, &config, &mut index, &mut report);
            } else {
                report.skip(RepositoryError::MissingWorkingTreeFile(relative));
            }
        }

        if index.is_changed() {
            index.write_updates()?;
        }

        Ok(report)
    }

    fn stage_file(
        &self,
        path: &Path,
        config: &Config,
        index: &mut Index,
        report: &mut StageReport,
    ) {
        let size = match self.workspace().file_size(path) {
            Ok(size) => size,
            Err(err) => return report.skip(unreadable(path, err)),
        };
        let limit = config.tracking.max_file_size;

        if size > limit {
            report.skip(RepositoryError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
            return;
        }

        let record = match self.workspace().file_record(path) {
            Ok(record) => record,
            Err(err) => return report.skip(unreadable(path, err)),
        };
        debug!(path = %path.display(), hash = %record.content_hash, "staged");

        index.add(record.clone());
        report.staged.insert(path.to_path_buf(), record);
    }

    pub fn show_add(&self, report: &StageReport) -> anyhow::Result<()> {
        for path in report.staged.keys() {
            writeln!(self.writer(), "{} {}", "added:".green(), path.display())?;
        }

        for reason in report.skipped.iter() {
            writeln!(self.writer(), "{} {}", "skipped:".yellow(), reason)?;
        }

        Ok(())
    }
}

/// Classify a working-tree read failure
///
/// A path that disappeared between listing and reading counts as missing.
fn unreadable(path: &Path, err: anyhow::Error) -> RepositoryError {
    let vanished = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|cause| cause.kind() == std::io::ErrorKind::NotFound);

    if vanished {
        RepositoryError::MissingWorkingTreeFile(path.to_path_buf())
    } else {
        RepositoryError::UnreadableWorkingTreeFile {
            path: path.to_path_buf(),
            reason: format!("{err:#}"),
        }
    }
}
