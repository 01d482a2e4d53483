use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a setup run.
///
/// Provisioning steps themselves do not show up here: a step whose command
/// exits non-zero is captured in the log and the run moves on.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read {path}: {source}")]
    ReleaseUnreadable { path: PathBuf, source: io::Error },

    #[error("os-release is missing required key {0}")]
    MissingReleaseKey(&'static str),

    #[error("distribution \"{0}\" is not supported for automated setup")]
    UnsupportedDistro(String),

    #[error("\"{0}\" does not match a known package manager")]
    UnknownPackageManager(String),

    #[error("failed to run {command}: {source}")]
    CommandSpawn { command: String, source: io::Error },
}
