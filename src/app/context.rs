use crate::ports::{ScaffoldFilesystem, StatusReporter};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ScaffoldFilesystem, R: StatusReporter> {
    filesystem: F,
    reporter: R,
}

impl<F: ScaffoldFilesystem, R: StatusReporter> AppContext<F, R> {
    /// Create a new application context.
    pub fn new(filesystem: F, reporter: R) -> Self {
        Self { filesystem, reporter }
    }

    /// Get a reference to the target filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a mutable reference to the status reporter.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consume the context, returning its parts.
    pub fn into_parts(self) -> (F, R) {
        (self.filesystem, self.reporter)
    }
}
