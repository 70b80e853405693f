use crate::errors::CoreError;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};

/// Operating system family, as far as trash layout is concerned.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Platform {
    /// macOS keeps a flat `~/.Trash`.
    MacOs,
    /// Linux and other Unix desktops follow the freedesktop.org layout.
    Freedesktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Freedesktop
        }
    }
}

/// Directory that receives trashed entries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TrashRoot {
    pub path: PathBuf,
}

impl TrashRoot {
    /// Trash location for `platform` under the given home directory.
    pub fn for_platform(platform: Platform, home: &Path) -> Self {
        let path = match platform {
            Platform::MacOs => home.join(".Trash"),
            Platform::Freedesktop => home.join(".local").join("share").join("Trash").join("files"),
        };
        Self { path }
    }

    /// Trash location of the current user on the current platform.
    pub fn locate() -> crate::Result<Self> {
        let home = dirs::home_dir().ok_or(CoreError::HomeNotFound)?;
        Ok(Self::for_platform(Platform::current(), &home))
    }

    /// Uses an explicit directory instead of the platform default.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the directory and any missing ancestors.
    pub fn ensure<F: FileSystem + ?Sized>(&self, fs: &F) -> crate::Result<()> {
        fs.create_dir_all(&self.path)
    }
}
