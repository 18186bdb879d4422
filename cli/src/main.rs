//! dockyard - container-backed development workspaces

use std::process::ExitCode;

use clap::Parser;
use dockyard_cli::application::ports::AppConfigStore;
use dockyard_cli::cli::Cli;
use dockyard_cli::infra::config::JsonConfigStore;
use dockyard_cli::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let store = JsonConfigStore::new().ok();
    let debug = match &store {
        Some(store) => store.load().await.is_ok_and(|c| c.debug),
        None => false,
    };
    let log_file = store
        .as_ref()
        .filter(|_| debug)
        .map(|s| s.data_path(&[logging::LOG_FILE]));
    if let Err(e) = logging::init(verbose, log_file.as_deref()) {
        eprintln!("Warning: {e:#}");
    }

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            if verbose > 0 || debug {
                eprintln!("{e:?}");
            }
            ExitCode::FAILURE
        }
    }
}
