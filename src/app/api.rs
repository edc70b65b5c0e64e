//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use tracing::info;

use crate::adapters::{FilesystemStore, StdoutReporter};
use crate::app::{AppContext, commands::scaffold};
use crate::ports::StatusReporter;

pub use crate::domain::{AppError, Layout, ScaffoldEvent, ScaffoldReport};

/// Scaffold the built-in layout into the current directory, printing status lines.
pub fn scaffold() -> Result<ScaffoldReport, AppError> {
    scaffold_at(std::env::current_dir()?)
}

/// Scaffold the built-in layout into an existing directory, printing status lines.
pub fn scaffold_at(path: impl Into<PathBuf>) -> Result<ScaffoldReport, AppError> {
    let layout = Layout::builtin()?;
    scaffold_layout_at(path, &layout, StdoutReporter::new())
}

/// Scaffold an arbitrary layout into an existing directory.
///
/// Status events go to `reporter` as they happen; the returned report holds
/// the same events in order.
pub fn scaffold_layout_at<R: StatusReporter>(
    path: impl Into<PathBuf>,
    layout: &Layout,
    reporter: R,
) -> Result<ScaffoldReport, AppError> {
    let store = FilesystemStore::existing(path.into())?;
    info!(root = %store.root().display(), entries = layout.len(), "scaffolding layout");

    let mut ctx = AppContext::new(store, reporter);
    scaffold::execute(&mut ctx, layout)
}
