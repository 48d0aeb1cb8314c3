use std::path::{Path, PathBuf};

use crate::diff;
use crate::error::Result;
use crate::formatter::ClangFormatter;
use crate::runner::RunCommand;

/// Outcome of linting one candidate file.
///
/// A report is data only; deciding how (and whether) to show it is the
/// binary's concern. A misformatted file is a normal negative result, not an
/// error.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Toplevel-relative path of the candidate.
    pub file: PathBuf,
    /// Unified diff against the formatted rendition; empty when the file is
    /// already formatted.
    pub diff: Vec<String>,
}

impl FileReport {
    pub fn is_formatted(&self) -> bool {
        self.diff.is_empty()
    }
}

/// Lints one candidate: reads it, formats it, diffs the two.
///
/// The source file is never modified. Read and formatter failures are fatal
/// and bubble up unchanged.
pub fn lint_file<R: RunCommand>(
    formatter: &ClangFormatter<R>,
    candidate: &Path,
) -> Result<FileReport> {
    let original = formatter.original_text(candidate)?;
    let formatted = formatter.formatted_text(candidate)?;
    let diff = diff::unified_diff(&original, &formatted, candidate);

    Ok(FileReport {
        file: candidate.to_path_buf(),
        diff,
    })
}

/// Running AND over per-file results.
///
/// Recording never short-circuits; every candidate is linted and counted
/// before the pass is judged. An empty pass is a success.
#[derive(Debug, Default)]
pub struct LintSummary {
    checked: usize,
    misformatted: usize,
}

impl LintSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &FileReport) {
        self.checked += 1;
        if !report.is_formatted() {
            self.misformatted += 1;
        }
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn misformatted(&self) -> usize {
        self.misformatted
    }

    pub fn all_formatted(&self) -> bool {
        self.misformatted == 0
    }
}
