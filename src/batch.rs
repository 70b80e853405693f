use crate::fs::{FileSystem, RealFileSystem};
use crate::helpers::{non_blank, resolve_target};
use crate::locate::TrashRoot;
use crate::models::{BatchResult, MoveOutcome, RelocateOptions, TargetError};
use crate::mover::move_entry;
use crate::naming::unique_destination;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, warn};

/// Moves every target into the current user's trash.
///
/// Per-target problems end up in the returned [`BatchResult`]. Only failing to
/// locate or create the trash directory is returned as an error, because no
/// target could be trashed without it. Targets need not be valid UTF-8; the
/// result lists carry a lossy rendering of such names.
pub fn relocate<S: AsRef<OsStr>>(
    targets: &[S],
    cwd: &Path,
    options: &RelocateOptions,
) -> crate::Result<BatchResult> {
    let root = match &options.trash_root {
        Some(path) => TrashRoot::at(path.clone()),
        None => TrashRoot::locate()?,
    };
    relocate_with(&RealFileSystem, &root, targets, cwd, options)
}

/// Like [`relocate`], with an explicit filesystem and trash root.
pub fn relocate_with<F, S>(
    fs: &F,
    root: &TrashRoot,
    targets: &[S],
    cwd: &Path,
    options: &RelocateOptions,
) -> crate::Result<BatchResult>
where
    F: FileSystem + ?Sized,
    S: AsRef<OsStr>,
{
    root.ensure(fs)?;

    let mut result = BatchResult::default();
    for target in targets {
        let Some(target) = non_blank(target.as_ref()) else {
            continue;
        };
        if let Some(outcome) = relocate_one(fs, root, target, cwd, options.allow_missing) {
            result.record(outcome);
        }
    }
    Ok(result)
}

fn relocate_one<F: FileSystem + ?Sized>(
    fs: &F,
    root: &TrashRoot,
    target: &OsStr,
    cwd: &Path,
    allow_missing: bool,
) -> Option<MoveOutcome> {
    let label = target.to_string_lossy().into_owned();
    let source = resolve_target(cwd, target);
    if !fs.exists(&source) {
        debug!(path = %label, "target does not exist");
        return (!allow_missing).then_some(MoveOutcome::Missing(label));
    }

    let moved = unique_destination(fs, &root.path, &source)
        .and_then(|destination| move_entry(fs, &source, &destination).map(|()| destination));
    let outcome = match moved {
        Ok(destination) => {
            debug!(path = %label, destination = %destination.display(), "moved to trash");
            MoveOutcome::Moved(label)
        }
        Err(err) => {
            warn!(path = %label, error = %err, "failed to move to trash");
            MoveOutcome::Error(TargetError {
                target: label,
                message: err.to_string(),
            })
        }
    };
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn blank_targets_are_ignored() {
        let cwd = tempfile::tempdir().unwrap();
        let trash = tempfile::tempdir().unwrap();
        let root = TrashRoot::at(trash.path());

        let result = relocate_with(
            &RealFileSystem,
            &root,
            &["", "   ", "\t\n"],
            cwd.path(),
            &RelocateOptions::default(),
        )
        .unwrap();

        assert_eq!(result, BatchResult::default());
    }

    #[test]
    fn targets_are_trimmed_before_use() {
        let cwd = tempfile::tempdir().unwrap();
        let trash = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join("notes.md"), "n").unwrap();

        let result = relocate_with(
            &RealFileSystem,
            &TrashRoot::at(trash.path()),
            &["  notes.md  "],
            cwd.path(),
            &RelocateOptions::default(),
        )
        .unwrap();

        assert_eq!(result.moved, vec!["notes.md"]);
        assert!(trash.path().join("notes.md").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_targets_are_moved() {
        use std::os::unix::ffi::OsStrExt;

        let cwd = tempfile::tempdir().unwrap();
        let trash = tempfile::tempdir().unwrap();
        let name = OsStr::from_bytes(b"bad\xff");
        fs::write(cwd.path().join(name), "raw").unwrap();

        let result = relocate_with(
            &RealFileSystem,
            &TrashRoot::at(trash.path()),
            &[name],
            cwd.path(),
            &RelocateOptions::default(),
        )
        .unwrap();

        assert_eq!(result.moved, vec![name.to_string_lossy().into_owned()]);
        assert!(result.errors.is_empty());
        assert!(trash.path().join(name).exists());
        assert!(!cwd.path().join(name).exists());
    }

    #[test]
    fn unusable_trash_root_aborts_the_batch() {
        let cwd = tempfile::tempdir().unwrap();
        let blocker = cwd.path().join("blocker");
        fs::write(&blocker, "file, not dir").unwrap();
        fs::write(cwd.path().join("a.txt"), "a").unwrap();

        let outcome = relocate_with(
            &RealFileSystem,
            &TrashRoot::at(blocker.join("trash")),
            &["a.txt"],
            cwd.path(),
            &RelocateOptions::default(),
        );

        assert!(outcome.is_err());
        assert!(cwd.path().join("a.txt").exists());
    }
}
