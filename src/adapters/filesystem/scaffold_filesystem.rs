//! `ScaffoldFilesystem` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

use super::FilesystemStore;

impl ScaffoldFilesystem for FilesystemStore {
    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Symlinks count as present, dangling ones included; they are never followed.
    fn path_exists(&self, path: &Path) -> bool {
        if self.validate_path_within_root(path).is_err() {
            return false;
        }
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn create_empty_file(&self, path: &Path) -> Result<(), AppError> {
        self.validate_path_within_root(path)?;
        OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(())
    }
}
