use std::io;
use std::path::PathBuf;

use semver::Version;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CflintError {
    #[error("Could not locate {0}")]
    BinaryNotFound(String),

    #[error("Incorrect version of {program}: got {found} but at least {required} is required")]
    VersionTooLow {
        program: String,
        found: Version,
        required: Version,
    },

    #[error("Could not parse a version number from `{program} --version` output: {output:?}")]
    VersionParse { program: String, output: String },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("clang-format failed on {}: {}", .file.display(), .source)]
    FormatterExecution {
        file: PathBuf,
        source: Box<CflintError>,
    },

    #[error("Could not read {}: {}", .file.display(), .source)]
    FileRead {
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CflintError>;
