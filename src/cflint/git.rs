use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::runner::RunCommand;

/// Ref that changed-files mode diffs against.
pub const BASELINE_REF: &str = "main";

/// Extensions that mark a file as lintable C or C++ source (case-sensitive).
pub const SOURCE_EXTENSIONS: [&str; 4] = ["h", "hpp", "c", "cpp"];

/// Which set of tracked files to lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// Every file under version control.
    All,
    /// Files that differ from [`BASELINE_REF`].
    Changed,
}

fn git() -> &'static Path {
    Path::new("git")
}

/// Repository root. Candidates are resolved against it and diff headers are
/// rendered relative to it.
pub fn toplevel<R: RunCommand>(runner: &R) -> Result<PathBuf> {
    let output = runner.capture(git(), &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(output))
}

/// Candidate source files for one lint pass, in git's enumeration order.
///
/// Both modes cover the whole repository and yield toplevel-relative paths
/// (`ls-files` needs the `:/` pathspec and `--full-name` for that; `diff`
/// does both by default), so candidates resolve correctly from any directory
/// inside the repository.
pub fn source_files<R: RunCommand>(runner: &R, mode: FileMode) -> Result<Vec<PathBuf>> {
    let listing = match mode {
        FileMode::All => runner.capture(git(), &["ls-files", "--full-name", ":/"])?,
        FileMode::Changed => runner.capture(git(), &["diff", "--name-only", BASELINE_REF])?,
    };

    let files: Vec<PathBuf> = listing
        .lines()
        .filter(|line| !line.is_empty())
        .filter(|line| is_source_file(line))
        .map(PathBuf::from)
        .collect();

    debug!("{} candidate file(s) in {:?} mode", files.len(), mode);
    Ok(files)
}

/// True when the path carries one of [`SOURCE_EXTENSIONS`].
pub fn is_source_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
