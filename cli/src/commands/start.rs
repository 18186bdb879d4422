//! `dockyard start`: bring the project container up.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{StartOptions, StartOutcome};
use crate::commands::ProjectArg;
use crate::domain::Project;
use crate::output::OutputContext;

/// Arguments for the start command.
#[derive(Args, Debug, Default)]
pub struct StartArgs {
    /// Remove the existing container before starting
    #[arg(long)]
    pub restart: bool,

    /// Remove the container and image, then rebuild
    #[arg(long)]
    pub rebuild: bool,

    #[command(flatten)]
    pub target: ProjectArg,
}

/// Run `dockyard start` (also backs `restart` and `rebuild`).
///
/// # Errors
///
/// Returns an error if the project cannot be resolved or any engine or
/// subscriber call fails.
pub async fn run(args: &StartArgs, app: &AppContext) -> Result<ExitCode> {
    let mut project = app.resolve_project(args.target.project.as_deref()).await?;
    let opts = StartOptions {
        restart: args.restart,
        rebuild: args.rebuild,
    };

    let outcome = {
        let reporter = app.terminal_reporter();
        app.reconciler(&reporter).start(&mut project, opts).await?
    };

    print_outcome(&outcome, &project, &app.output);
    Ok(ExitCode::SUCCESS)
}

fn print_outcome(outcome: &StartOutcome, project: &Project, ctx: &OutputContext) {
    match outcome {
        StartOutcome::Created => {
            ctx.success(&format!("Project '{}' is running.", project.name));
        }
        StartOutcome::Started => {
            ctx.success(&format!("Project '{}' started.", project.name));
        }
        StartOutcome::AlreadyRunning => {
            ctx.info(&format!("Project '{}' is already running.", project.name));
        }
        StartOutcome::Untouched(status) => {
            ctx.info(&format!(
                "Container is {status:?}; not started. Try: dockyard restart"
            ));
        }
    }
    ctx.kv("Container", &project.container_name());
    if let Some(image) = &project.image_name {
        ctx.kv("Image", image);
    }
}
