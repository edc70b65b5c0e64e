use crate::domain::{AppError, ScaffoldEvent};
use crate::ports::StatusReporter;

/// Status reporter that keeps every event for later assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<ScaffoldEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Printed form of every recorded event.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&mut self, event: &ScaffoldEvent) -> Result<(), AppError> {
        self.events.push(event.clone());
        Ok(())
    }
}
