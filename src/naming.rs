//! Collision-free destination names inside the trash root.
//!
//! The plain base name is tried first. When it is taken, candidates of the
//! form `<stem>-<millis>-<attempt><ext>` are tried in order. There is no lock:
//! another process can still claim a name between the check and the move.

use crate::errors::CoreError;
use crate::fs::FileSystem;
use crate::helpers::epoch_millis;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Highest attempt number tried before giving up.
pub const MAX_NAME_ATTEMPTS: u32 = 9999;

/// Splits a base name into stem and extension.
///
/// The extension starts at the last `.` unless that dot opens the name, so
/// `.bashrc` is all stem. Names that are not valid UTF-8 are kept whole.
pub fn split_name(name: &OsStr) -> (OsString, OsString) {
    match name.to_str() {
        Some(text) => match text.rfind('.') {
            Some(idx) if idx > 0 => (OsString::from(&text[..idx]), OsString::from(&text[idx..])),
            _ => (OsString::from(text), OsString::new()),
        },
        None => (name.to_os_string(), OsString::new()),
    }
}

/// Builds the disambiguated candidate for one attempt.
pub fn next_candidate(root: &Path, stem: &OsStr, ext: &OsStr, timestamp: i64, attempt: u32) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push(format!("-{timestamp}-{attempt}"));
    name.push(ext);
    root.join(name)
}

/// Picks a destination under `root` for `original` that does not exist yet.
pub fn unique_destination<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    original: &Path,
) -> crate::Result<PathBuf> {
    let base = original
        .file_name()
        .ok_or_else(|| CoreError::invalid_path(format!("{} has no file name", original.display())))?;

    let candidate = root.join(base);
    if !fs.exists(&candidate) {
        return Ok(candidate);
    }

    let (stem, ext) = split_name(base);
    let timestamp = epoch_millis(fs.now());
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let candidate = next_candidate(root, &stem, &ext, timestamp, attempt);
        if !fs.exists(&candidate) {
            debug!(name = %candidate.display(), attempt, "disambiguated trash destination");
            return Ok(candidate);
        }
    }

    Err(CoreError::NamesExhausted(base.to_string_lossy().into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::RealFileSystem;
    use std::cell::Cell;
    use std::fs::{self, Metadata};
    use std::time::{Duration, SystemTime};

    fn split(name: &str) -> (String, String) {
        let (stem, ext) = split_name(OsStr::new(name));
        (stem.into_string().unwrap(), ext.into_string().unwrap())
    }

    #[test]
    fn split_name_handles_common_shapes() {
        assert_eq!(split("notes.md"), ("notes".into(), ".md".into()));
        assert_eq!(split("archive.tar.gz"), ("archive.tar".into(), ".gz".into()));
        assert_eq!(split("Makefile"), ("Makefile".into(), "".into()));
        assert_eq!(split("trailing."), ("trailing".into(), ".".into()));
    }

    #[test]
    fn split_name_keeps_dotfiles_whole() {
        assert_eq!(split(".bashrc"), (".bashrc".into(), "".into()));
        assert_eq!(split(".config.bak"), (".config".into(), ".bak".into()));
    }

    #[test]
    fn next_candidate_inserts_suffix_before_extension() {
        let path = next_candidate(Path::new("/t"), OsStr::new("report"), OsStr::new(".txt"), 42, 3);
        assert_eq!(path, PathBuf::from("/t/report-42-3.txt"));

        let path = next_candidate(Path::new("/t"), OsStr::new(".bashrc"), OsStr::new(""), 42, 1);
        assert_eq!(path, PathBuf::from("/t/.bashrc-42-1"));
    }

    #[test]
    fn free_base_name_is_used_verbatim() {
        let trash = tempfile::tempdir().unwrap();
        let dest = unique_destination(&RealFileSystem, trash.path(), Path::new("/src/notes.md")).unwrap();
        assert_eq!(dest, trash.path().join("notes.md"));
    }

    #[test]
    fn repeated_collisions_yield_distinct_names() {
        let trash = tempfile::tempdir().unwrap();
        fs::write(trash.path().join("report.txt"), "first").unwrap();

        let second = unique_destination(&RealFileSystem, trash.path(), Path::new("/a/report.txt")).unwrap();
        fs::write(&second, "second").unwrap();
        let third = unique_destination(&RealFileSystem, trash.path(), Path::new("/b/report.txt")).unwrap();

        assert_ne!(second, trash.path().join("report.txt"));
        assert_ne!(second, third);
        assert!(!third.exists());
        let name = second.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("report-") && name.ends_with(".txt"), "{name}");
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let trash = tempfile::tempdir().unwrap();
        let err = unique_destination(&RealFileSystem, trash.path(), Path::new("/")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath(_)));
    }

    /// Claims every path exists and counts the lookups.
    struct Crowded {
        lookups: Cell<u32>,
    }

    impl FileSystem for Crowded {
        fn now(&self) -> SystemTime {
            SystemTime::UNIX_EPOCH + Duration::from_millis(7)
        }
        fn exists(&self, _path: &Path) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            true
        }
        fn symlink_metadata(&self, path: &Path) -> crate::Result<Metadata> {
            RealFileSystem.symlink_metadata(path)
        }
        fn create_dir_all(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn create_dir(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn rename(&self, _from: &Path, _to: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn copy_file(&self, _from: &Path, _to: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn copy_symlink(&self, _from: &Path, _to: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn list_dir(&self, _path: &Path) -> crate::Result<Vec<PathBuf>> {
            Ok(Vec::new())
        }
        fn remove_file(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }
        fn remove_dir_all(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn exhaustion_after_ceiling() {
        let fs = Crowded { lookups: Cell::new(0) };

        let err = unique_destination(&fs, Path::new("/trash"), Path::new("/src/full.log")).unwrap_err();

        assert!(matches!(err, CoreError::NamesExhausted(ref name) if name == "full.log"));
        assert_eq!(fs.lookups.get(), MAX_NAME_ATTEMPTS + 1);
    }
}
