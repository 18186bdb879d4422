//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands::{self, ProjectArg};

/// Container-backed development workspaces
#[derive(Parser)]
#[command(
    name = "dockyard",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also disabled by any NO_COLOR value)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register the current directory as a project
    Init(commands::init::InitArgs),

    /// Create and start the project container
    Start(commands::start::StartArgs),

    /// Recreate the project container
    Restart(ProjectArg),

    /// Rebuild the image and recreate the container
    Rebuild(ProjectArg),

    /// Remove the project container
    Stop(ProjectArg),

    /// List registered projects
    List,

    /// Print a project's directory
    Cd(commands::cd::CdArgs),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&AppFlags { no_color, quiet })?;

        match command {
            Command::Init(args) => commands::init::run(args, &app).await,
            Command::Start(args) => commands::start::run(&args, &app).await,
            Command::Restart(target) => {
                let args = commands::start::StartArgs {
                    restart: true,
                    rebuild: false,
                    target,
                };
                commands::start::run(&args, &app).await
            }
            Command::Rebuild(target) => {
                let args = commands::start::StartArgs {
                    restart: false,
                    rebuild: true,
                    target,
                };
                commands::start::run(&args, &app).await
            }
            Command::Stop(target) => commands::stop::run(&target, &app).await,
            Command::List => commands::list::run(&app).await,
            Command::Cd(args) => commands::cd::run(&args, &app).await,
        }
    }
}
