//! Filesystem operations needed to scaffold a layout.
//!
//! The port only ever creates. It never reads, writes content, or deletes.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for create-only filesystem access rooted at a target directory.
pub trait ScaffoldFilesystem {
    /// Resolve a layout entry to an absolute path under the target root.
    fn resolve_path(&self, path: &str) -> PathBuf;

    /// Check whether a file or directory exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Create a zero-byte file. Must fail rather than truncate if the file exists.
    fn create_empty_file(&self, path: &Path) -> Result<(), AppError>;
}
