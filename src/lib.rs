//! Moves files and directories into the per-user trash instead of deleting
//! them. Destinations never overwrite earlier trashed entries, and moves
//! across filesystems fall back to copy and delete.

pub mod batch;
pub mod errors;
pub mod fs;
pub mod helpers;
pub mod locate;
pub mod models;
pub mod mover;
pub mod naming;

pub use batch::{relocate, relocate_with};
pub use errors::{CoreError, Result};
pub use fs::{FileSystem, RealFileSystem};
pub use locate::{Platform, TrashRoot};
pub use models::{BatchResult, ExitStatusLike, MoveOutcome, RelocateOptions, TargetError};
pub use mover::move_entry;
pub use naming::{next_candidate, split_name, unique_destination, MAX_NAME_ATTEMPTS};

/// Re-export a small stable API surface for front ends.
pub mod prelude {
    pub use crate::{
        batch::*,
        errors::{CoreError, Result},
        fs::{FileSystem, RealFileSystem},
        locate::*,
        models::*,
    };
}
