//! webskel: Scaffold the empty file layout of a web application.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{scaffold, scaffold_at, scaffold_layout_at};
pub use domain::{AppError, Layout, ScaffoldEvent, ScaffoldReport};
pub use ports::{ScaffoldFilesystem, StatusReporter};
