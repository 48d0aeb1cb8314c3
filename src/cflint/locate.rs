use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{CflintError, Result};

/// The program this tool wraps.
pub const PROGRAM_NAME: &str = "clang-format";

/// Resolves the clang-format binary.
///
/// An explicit path wins and must name an existing file; otherwise
/// [`PROGRAM_NAME`] is searched on `PATH`. Either way, failure to come up
/// with a usable path is [`CflintError::BinaryNotFound`].
pub fn find_binary(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if path.is_file() {
                debug!("using explicit {} at {}", PROGRAM_NAME, path.display());
                Ok(path.to_path_buf())
            } else {
                Err(CflintError::BinaryNotFound(path.display().to_string()))
            }
        }
        None => {
            let found = which::which(PROGRAM_NAME)
                .map_err(|_| CflintError::BinaryNotFound(PROGRAM_NAME.to_string()))?;
            debug!("found {} at {}", PROGRAM_NAME, found.display());
            Ok(found)
        }
    }
}
