use std::io::{self, Write};

use crate::domain::{AppError, ScaffoldEvent};
use crate::ports::StatusReporter;

/// Status reporter that prints one line per event to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl StdoutReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for StdoutReporter {
    fn report(&mut self, event: &ScaffoldEvent) -> Result<(), AppError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", event)?;
        Ok(())
    }
}
