//! `dockyard list`: show every indexed project.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::AppConfigStore;

/// Run `dockyard list`.
///
/// Reads the index only; names shown here may lag behind the records.
///
/// # Errors
///
/// Returns an error if the global config cannot be read.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let config = app.store.config().load().await?;
    let ctx = &app.output;

    if config.projects.is_empty() {
        ctx.info("No projects yet. Create one: dockyard init");
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &config.projects {
        println!("{}\t{}\t{}", entry.id, entry.name, entry.path.display());
    }
    Ok(ExitCode::SUCCESS)
}
