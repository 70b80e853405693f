use std::fmt;
use std::path::PathBuf;

/// Caller-side knobs for one batch.
#[derive(Debug, Clone, Default)]
pub struct RelocateOptions {
    /// Skip missing targets instead of reporting them.
    pub allow_missing: bool,
    /// Trash directory to use instead of the platform default.
    pub trash_root: Option<PathBuf>,
}

impl RelocateOptions {
    pub fn allow_missing(mut self, allow_missing: bool) -> Self {
        self.allow_missing = allow_missing;
        self
    }

    pub fn with_trash_root(mut self, trash_root: impl Into<PathBuf>) -> Self {
        self.trash_root = Some(trash_root.into());
        self
    }
}

/// A target that could not be moved, with the reason.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TargetError {
    pub target: String,
    pub message: String,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rm: {}: {}", self.target, self.message)
    }
}

/// What happened to a single target.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    Moved(String),
    Missing(String),
    Error(TargetError),
}

/// Aggregated outcome of one batch, each list in input order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BatchResult {
    pub moved: Vec<String>,
    pub missing: Vec<String>,
    pub errors: Vec<TargetError>,
}

impl BatchResult {
    pub fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved(target) => self.moved.push(target),
            MoveOutcome::Missing(target) => self.missing.push(target),
            MoveOutcome::Error(error) => self.errors.push(error),
        }
    }

    pub fn exit_status(&self, allow_missing: bool) -> ExitStatusLike {
        if !self.errors.is_empty() || (!allow_missing && !self.missing.is_empty()) {
            ExitStatusLike::Error
        } else {
            ExitStatusLike::Ok
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExitStatusLike {
    Ok,
    Error,
    Usage,
}

impl ExitStatusLike {
    pub fn as_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
            Self::Usage => 2,
        }
    }
}
