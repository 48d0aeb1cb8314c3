use semver::Version;

use crate::error::{CflintError, Result};
use crate::locate::PROGRAM_NAME;

/// Oldest clang-format release whose output this tool accepts as canonical.
pub fn minimum_required() -> Version {
    Version::new(7, 0, 0)
}

/// Extracts the version number from `clang-format --version` output.
///
/// The first whitespace-separated token starting with a digit is parsed as a
/// strict semantic version. That tolerates vendor prefixes such as
/// `Ubuntu clang-format version 14.0.0-1ubuntu1` while refusing to guess at
/// anything else.
pub fn parse_version_output(output: &str) -> Result<Version> {
    let candidate = output
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()));

    match candidate {
        Some(token) => Version::parse(token).map_err(|_| malformed(output)),
        None => Err(malformed(output)),
    }
}

/// Rejects versions older than [`minimum_required`].
pub fn ensure_minimum(found: &Version) -> Result<()> {
    let required = minimum_required();
    if *found < required {
        return Err(CflintError::VersionTooLow {
            program: PROGRAM_NAME.to_string(),
            found: found.clone(),
            required,
        });
    }
    Ok(())
}

fn malformed(output: &str) -> CflintError {
    CflintError::VersionParse {
        program: PROGRAM_NAME.to_string(),
        output: output.to_string(),
    }
}
