use std::fmt;
use std::path::{Path, PathBuf};

/// A status event emitted while scaffolding.
///
/// The `Display` form is the exact line printed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    DirectoryCreated(PathBuf),
    FileCreated(PathBuf),
    FileExists(PathBuf),
}

impl ScaffoldEvent {
    pub fn path(&self) -> &Path {
        match self {
            ScaffoldEvent::DirectoryCreated(path)
            | ScaffoldEvent::FileCreated(path)
            | ScaffoldEvent::FileExists(path) => path,
        }
    }
}

impl fmt::Display for ScaffoldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldEvent::DirectoryCreated(path) => {
                write!(f, "Created directory: {}", path.display())
            }
            ScaffoldEvent::FileCreated(path) => write!(f, "Created file: {}", path.display()),
            ScaffoldEvent::FileExists(path) => {
                write!(f, "File already exists: {}", path.display())
            }
        }
    }
}

/// Ordered record of everything a completed run reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub events: Vec<ScaffoldEvent>,
}

impl ScaffoldReport {
    pub fn push(&mut self, event: ScaffoldEvent) {
        self.events.push(event);
    }

    pub fn directories_created(&self) -> usize {
        self.count(|e| matches!(e, ScaffoldEvent::DirectoryCreated(_)))
    }

    pub fn files_created(&self) -> usize {
        self.count(|e| matches!(e, ScaffoldEvent::FileCreated(_)))
    }

    pub fn files_existing(&self) -> usize {
        self.count(|e| matches!(e, ScaffoldEvent::FileExists(_)))
    }

    fn count(&self, pred: impl Fn(&ScaffoldEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}
