use colored::Colorize;

const LABEL_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileStatus {
    /// Staged and unchanged since
    Staged,
    /// Never staged, or changed since it was staged
    Modified,
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Staged => "staged:     ",
            FileStatus::Modified => "modified:   ",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        let colored_str = match self {
            FileStatus::Staged => label.green(),
            FileStatus::Modified => label.red(),
        };
        write!(f, "{:>width$}{}", "", colored_str, width = LABEL_WIDTH)
    }
}
