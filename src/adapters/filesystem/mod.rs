//! Local-disk adapter for `ScaffoldFilesystem`.
//!
//! `FilesystemStore` owns the target root and rejects any path that would
//! land outside it.

mod scaffold_filesystem;

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at the scaffold target directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at an existing directory, resolved to its canonical path.
    pub fn existing(root: PathBuf) -> Result<Self, AppError> {
        match fs::canonicalize(&root) {
            Ok(canonical) if canonical.is_dir() => Ok(Self::new(canonical)),
            Ok(_) => Err(AppError::RootNotFound(root.display().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AppError::RootNotFound(root.display().to_string()))
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// The target root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemStore {
    /// Validates that a path (after logical normalization) is within the root.
    ///
    /// Layout entries are already rejected for `..` and absolute forms; this is the
    /// second check for callers that hand the store paths directly.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        if !normalize_path(&full_path).starts_with(normalize_path(&self.root)) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
