mod scaffold_filesystem;
mod status_reporter;

pub use scaffold_filesystem::ScaffoldFilesystem;
pub use status_reporter::StatusReporter;
