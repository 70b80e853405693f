use crate::errors::CoreError;
use std::fs::{self, File, Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Filesystem abstraction boundary for the relocation core.
///
/// Keeping this trait narrow makes it easy to write deterministic tests, e.g.
/// a backend whose `rename` always fails as if the trash lived on another
/// device, or whose clock is pinned.
pub trait FileSystem {
    /// Returns the current time in wall-clock format.
    fn now(&self) -> SystemTime;

    /// Returns true when any directory entry exists at path, including a
    /// dangling symlink.
    fn exists(&self, path: &Path) -> bool;

    /// Reads symlink metadata.
    fn symlink_metadata(&self, path: &Path) -> crate::Result<Metadata>;

    /// Creates a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> crate::Result<()>;

    /// Creates a single directory, failing if anything already exists there.
    fn create_dir(&self, path: &Path) -> crate::Result<()>;

    /// Renames/moves a path.
    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Copies a regular file into a newly created file; never overwrites.
    fn copy_file(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Recreates the symlink at `from` as a new symlink at `to`.
    fn copy_symlink(&self, from: &Path, to: &Path) -> crate::Result<()>;

    /// Lists directory children as concrete paths.
    fn list_dir(&self, path: &Path) -> crate::Result<Vec<PathBuf>>;

    /// Removes a file or symlink.
    fn remove_file(&self, path: &Path) -> crate::Result<()>;

    /// Removes a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> crate::Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn symlink_metadata(&self, path: &Path) -> crate::Result<Metadata> {
        fs::symlink_metadata(path).map_err(|err| CoreError::io(path, err))
    }

    fn create_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::create_dir_all(path).map_err(|err| CoreError::io(path, err))
    }

    fn create_dir(&self, path: &Path) -> crate::Result<()> {
        fs::create_dir(path).map_err(|err| CoreError::io(path, err))
    }

    fn rename(&self, from: &Path, to: &Path) -> crate::Result<()> {
        fs::rename(from, to).map_err(|err| CoreError::io(from, err))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> crate::Result<()> {
        let mut reader = File::open(from).map_err(|err| CoreError::io(from, err))?;
        let permissions = reader
            .metadata()
            .map_err(|err| CoreError::io(from, err))?
            .permissions();
        let mut writer = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(to)
            .map_err(|err| CoreError::io(to, err))?;
        io::copy(&mut reader, &mut writer).map_err(|err| CoreError::io(to, err))?;
        writer.sync_all().map_err(|err| CoreError::io(to, err))?;
        fs::set_permissions(to, permissions).map_err(|err| CoreError::io(to, err))
    }

    fn copy_symlink(&self, from: &Path, to: &Path) -> crate::Result<()> {
        let link = fs::read_link(from).map_err(|err| CoreError::io(from, err))?;
        create_symlink(from, &link, to).map_err(|err| CoreError::io(to, err))
    }

    fn list_dir(&self, path: &Path) -> crate::Result<Vec<PathBuf>> {
        fs::read_dir(path)
            .map_err(|err| CoreError::io(path, err))?
            .map(|entry| entry.map(|v| v.path()))
            .collect::<Result<Vec<PathBuf>, io::Error>>()
            .map_err(|err| CoreError::io(path, err))
    }

    fn remove_file(&self, path: &Path) -> crate::Result<()> {
        fs::remove_file(path).map_err(|err| CoreError::io(path, err))
    }

    fn remove_dir_all(&self, path: &Path) -> crate::Result<()> {
        fs::remove_dir_all(path).map_err(|err| CoreError::io(path, err))
    }
}

#[cfg(unix)]
fn create_symlink(_original: &Path, link: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(link, to)
}

#[cfg(windows)]
fn create_symlink(original: &Path, link: &Path, to: &Path) -> io::Result<()> {
    // Windows needs to know whether the link points at a directory.
    if fs::metadata(original).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(link, to)
    } else {
        std::os::windows::fs::symlink_file(link, to)
    }
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_original: &Path, _link: &Path, _to: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}
