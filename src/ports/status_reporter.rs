use crate::domain::{AppError, ScaffoldEvent};

/// Port for emitting human-readable status lines.
pub trait StatusReporter {
    /// Report a single scaffold event.
    fn report(&mut self, event: &ScaffoldEvent) -> Result<(), AppError>;
}
