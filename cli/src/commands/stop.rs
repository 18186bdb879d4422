//! `dockyard stop`: remove the project container.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::commands::ProjectArg;

/// Run `dockyard stop`.
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or removal fails.
pub async fn run(args: &ProjectArg, app: &AppContext) -> Result<ExitCode> {
    let project = app.resolve_project(args.project.as_deref()).await?;
    let removed = {
        let reporter = app.terminal_reporter();
        app.reconciler(&reporter).stop(&project).await?
    };

    let ctx = &app.output;
    if removed {
        ctx.success(&format!("Project '{}' stopped.", project.name));
        ctx.info("Resume: dockyard start");
    } else {
        ctx.info(&format!("Project '{}' has no container.", project.name));
    }
    Ok(ExitCode::SUCCESS)
}
