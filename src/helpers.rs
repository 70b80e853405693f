//! Path and time helpers shared by the relocation steps.

use chrono::{DateTime, Utc};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// Resolves a trimmed target against the working directory.
///
/// Absolute targets are kept, relative ones are joined onto `cwd`. The result
/// is normalized lexically: `.` segments disappear and `..` drops the previous
/// component. Symlinks are not consulted.
pub fn resolve_target(cwd: &Path, target: impl AsRef<Path>) -> PathBuf {
    let target = target.as_ref();
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        cwd.join(target)
    };
    normalize_lexically(&joined)
}

/// Trims surrounding whitespace; `None` for blank targets.
///
/// Names that are not valid UTF-8 are returned untouched.
pub fn non_blank(raw: &OsStr) -> Option<&OsStr> {
    match raw.to_str() {
        Some(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| OsStr::new(trimmed))
        }
        None => Some(raw),
    }
}

/// Removes `.` and resolves `..` without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Milliseconds since the Unix epoch, the coarse nonce used in trashed names.
pub fn epoch_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}
