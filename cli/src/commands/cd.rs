//! `dockyard cd`: print a project's directory.
//!
//! A child process cannot change its parent's directory, so the path is
//! printed for `cd "$(dockyard cd NAME)"`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;

#[derive(Args, Debug)]
pub struct CdArgs {
    /// Project name
    pub name: String,
}

/// Run `dockyard cd`.
///
/// # Errors
///
/// Returns `ProjectError::NotFound` if no project has that name.
pub async fn run(args: &CdArgs, app: &AppContext) -> Result<ExitCode> {
    let path = app.resolver().path_of(&args.name).await?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}
