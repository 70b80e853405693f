use std::{io, path::PathBuf};

/// Error type shared by the locator, namer, mover and batch coordinator.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// File system I/O failure.
    #[error("{}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),

    /// A path cannot be relocated, e.g. it has no final component.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The per-user home directory could not be resolved.
    #[error("unable to determine the home directory")]
    HomeNotFound,

    /// Every disambiguated destination name was already taken.
    #[error("Unable to find free Trash destination for {0}")]
    NamesExhausted(String),

    /// The fallback copy only handles regular files, directories and symlinks.
    #[error("cannot copy special file {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// The fallback copy found something already at the destination.
    #[error("destination already exists: {}", .0.display())]
    Conflict(PathBuf),
}

impl CoreError {
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }

    pub fn conflict(path: impl Into<PathBuf>) -> Self {
        Self::Conflict(path.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
