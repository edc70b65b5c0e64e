//! Scaffold command: guarantee every layout entry exists as a file.

use tracing::{debug, error};

use crate::app::AppContext;
use crate::domain::{AppError, Layout, ScaffoldEvent, ScaffoldReport};
use crate::ports::{ScaffoldFilesystem, StatusReporter};

/// Execute the scaffold command.
///
/// Entries are processed strictly in layout order. A missing parent directory
/// is created (with ancestors) and reported; an existing one is skipped
/// silently. A missing file is created empty; an existing file is reported
/// and left untouched. The first filesystem error aborts the run and nothing
/// already created is rolled back.
pub fn execute<F, R>(
    ctx: &mut AppContext<F, R>,
    layout: &Layout,
) -> Result<ScaffoldReport, AppError>
where
    F: ScaffoldFilesystem,
    R: StatusReporter,
{
    let mut report = ScaffoldReport::default();

    for entry in layout.iter() {
        let full_path = ctx.filesystem().resolve_path(entry);
        debug!(entry, path = %full_path.display(), "scaffolding entry");

        if let Some(dir_path) = full_path.parent()
            && !ctx.filesystem().path_exists(dir_path)
        {
            ctx.filesystem().create_dir_all(dir_path).inspect_err(|e| {
                error!(path = %dir_path.display(), error = %e, "failed to create directory");
            })?;
            emit(ctx, &mut report, ScaffoldEvent::DirectoryCreated(dir_path.to_path_buf()))?;
        }

        let event = if ctx.filesystem().path_exists(&full_path) {
            ScaffoldEvent::FileExists(full_path)
        } else {
            ctx.filesystem().create_empty_file(&full_path).inspect_err(|e| {
                error!(path = %full_path.display(), error = %e, "failed to create file");
            })?;
            ScaffoldEvent::FileCreated(full_path)
        };
        emit(ctx, &mut report, event)?;
    }

    Ok(report)
}

fn emit<F, R>(
    ctx: &mut AppContext<F, R>,
    report: &mut ScaffoldReport,
    event: ScaffoldEvent,
) -> Result<(), AppError>
where
    F: ScaffoldFilesystem,
    R: StatusReporter,
{
    ctx.reporter_mut().report(&event)?;
    report.push(event);
    Ok(())
}
