//! Moving one entry into the trash.
//!
//! A plain rename is tried first. When it fails for any reason, the entry is
//! copied recursively and the source removed afterwards. That fallback is not
//! atomic: an interruption can leave a partial destination next to an intact
//! source.

use crate::errors::CoreError;
use crate::fs::FileSystem;
use std::path::Path;
use tracing::debug;

/// Moves `source` to `destination`, which must not exist yet.
pub fn move_entry<F: FileSystem + ?Sized>(fs: &F, source: &Path, destination: &Path) -> crate::Result<()> {
    match fs.rename(source, destination) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!(
                source = %source.display(),
                destination = %destination.display(),
                error = %err,
                "rename failed, falling back to copy and delete"
            );
            copy_then_remove(fs, source, destination)
        }
    }
}

fn copy_then_remove<F: FileSystem + ?Sized>(fs: &F, source: &Path, destination: &Path) -> crate::Result<()> {
    let file_type = fs.symlink_metadata(source)?.file_type();
    if fs.exists(destination) {
        return Err(CoreError::conflict(destination));
    }
    if file_type.is_dir() && destination.starts_with(source) {
        return Err(CoreError::invalid_path(format!(
            "cannot move {} into itself",
            source.display()
        )));
    }

    copy_tree(fs, source, destination)?;

    if file_type.is_dir() {
        fs.remove_dir_all(source)
    } else {
        fs.remove_file(source)
    }
}

/// Copies `source` to `destination` without following symlinks.
fn copy_tree<F: FileSystem + ?Sized>(fs: &F, source: &Path, destination: &Path) -> crate::Result<()> {
    let file_type = fs.symlink_metadata(source)?.file_type();
    if file_type.is_symlink() {
        fs.copy_symlink(source, destination)
    } else if file_type.is_dir() {
        fs.create_dir(destination)?;
        for child in fs.list_dir(source)? {
            let name = child
                .file_name()
                .ok_or_else(|| CoreError::invalid_path(format!("{} has no file name", child.display())))?;
            copy_tree(fs, &child, &destination.join(name))?;
        }
        Ok(())
    } else if file_type.is_file() {
        fs.copy_file(source, destination)
    } else {
        // Reading a FIFO or a device could block or never end.
        Err(CoreError::UnsupportedFileType(source.to_path_buf()))
    }
}
