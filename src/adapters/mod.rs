pub mod filesystem;
pub mod stdout_reporter;

pub use filesystem::FilesystemStore;
pub use stdout_reporter::StdoutReporter;
