use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while running a task.
///
/// Failures surface here and travel up to `main`, which picks the process
/// exit status via [`Error::exit_status`]. Nothing below the entry point
/// terminates the process.
#[derive(Error, Debug)]
pub enum Error {
    /// An external command ran and exited non-zero.
    #[error("Command failed (returned {status}): {command}")]
    Command { status: i32, command: String },

    /// An external command could not be started at all.
    #[error("Failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    /// Captured standard output was not valid UTF-8.
    #[error("Output of {program} is not valid UTF-8: {source}")]
    Output {
        program: String,
        source: FromUtf8Error,
    },

    /// Changing into a project directory failed.
    #[error("Failed to change directory to {}: {source}", .path.display())]
    Dir { path: PathBuf, source: io::Error },

    /// The example discovery pattern did not parse.
    #[error("Invalid example pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The status the process should exit with when this error reaches the
    /// top level: a failed command's own status, 1 for everything else.
    pub fn exit_status(&self) -> i32 {
        match self {
            Error::Command { status, .. } => *status,
            _ => 1,
        }
    }
}
