//! Command implementations

pub mod cd;
pub mod init;
pub mod list;
pub mod start;
pub mod stop;

use clap::Args;

/// Selects a project by name instead of the working directory.
#[derive(Args, Debug, Default, Clone)]
pub struct ProjectArg {
    /// Project name (defaults to the project in the current directory)
    #[arg(long, short = 'p', value_name = "NAME")]
    pub project: Option<String>,
}
