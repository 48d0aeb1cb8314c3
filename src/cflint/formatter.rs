use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use semver::Version;

use crate::error::{CflintError, Result};
use crate::git;
use crate::locate;
use crate::runner::RunCommand;
use crate::version;

/// Validated handle to the clang-format binary.
///
/// Construction performs every fatal precondition check up front: the binary
/// is located, its reported version is parsed and checked against the
/// minimum, and the repository toplevel is recorded for resolving candidates
/// and rendering diff headers. A handle that exists is ready to lint; nothing
/// about it changes afterwards.
#[derive(Debug)]
pub struct ClangFormatter<R: RunCommand> {
    runner: R,
    path: PathBuf,
    version: Version,
    toplevel: PathBuf,
}

impl<R: RunCommand> ClangFormatter<R> {
    pub fn new(runner: R, explicit_path: Option<&Path>) -> Result<Self> {
        let path = locate::find_binary(explicit_path)?;
        let reported = runner.capture(&path, &["--version"])?;
        let version = version::parse_version_output(&reported)?;
        version::ensure_minimum(&version)?;
        let toplevel = git::toplevel(&runner)?;
        debug!(
            "{} {} against {}",
            path.display(),
            version,
            toplevel.display()
        );

        Ok(Self {
            runner,
            path,
            version,
            toplevel,
        })
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn toplevel(&self) -> &Path {
        &self.toplevel
    }

    /// Absolute location of a toplevel-relative candidate, so the tool works
    /// from any directory inside the repository.
    pub fn resolve(&self, candidate: &Path) -> PathBuf {
        self.toplevel.join(candidate)
    }

    /// The candidate's content as it is on disk, decoded with best-effort
    /// substitution. A file that cannot be read is fatal, never skipped.
    pub fn original_text(&self, candidate: &Path) -> Result<String> {
        let bytes = fs::read(self.resolve(candidate)).map_err(|source| CflintError::FileRead {
            file: candidate.to_path_buf(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// What the candidate should look like: clang-format's stdout in
    /// print-only mode. The file itself is never modified.
    pub fn formatted_text(&self, candidate: &Path) -> Result<String> {
        let absolute = self.resolve(candidate);
        let target = absolute.to_string_lossy();
        let output = self
            .runner
            .run_checked(self.path(), &["--style=file", &target])
            .map_err(|source| CflintError::FormatterExecution {
                file: candidate.to_path_buf(),
                source: Box::new(source),
            })?;
        Ok(output.stdout_text().into_owned())
    }

    /// Command line a user can run, from any directory, to rewrite the
    /// candidate in place.
    pub fn fix_command(&self, candidate: &Path) -> String {
        format!(
            "{} --style=file -i {}",
            self.path.display(),
            self.resolve(candidate).display()
        )
    }
}
