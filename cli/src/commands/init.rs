//! `dockyard init`: register the current directory as a project.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::{Project, ProjectError, ProjectType, VolumeSpec};

/// Arguments for the init command.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Project name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// How the image is obtained: generic or dockerfile
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<ProjectType>,

    /// Image to run for generic projects
    #[arg(long)]
    pub image: Option<String>,

    /// Dockerfile path relative to the project directory
    #[arg(long)]
    pub dockerfile: Option<String>,

    /// Container environment variable (repeatable)
    #[arg(long = "env", short = 'e', value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Port mapping HOST:CONTAINER (repeatable)
    #[arg(long = "port", value_name = "PORT")]
    pub ports: Vec<String>,

    /// Volume SOURCE:DEST[:OPTIONS] (repeatable)
    #[arg(long = "volume", value_name = "VOLUME")]
    pub volumes: Vec<String>,

    /// Extra /etc/hosts entry (repeatable)
    #[arg(long = "extra-host", value_name = "HOST=IP")]
    pub extra_hosts: Vec<String>,

    /// Image build argument (repeatable)
    #[arg(long = "build-arg", value_name = "KEY=VALUE")]
    pub build_args: Vec<String>,
}

/// Run `dockyard init`.
///
/// # Errors
///
/// Returns `ProjectError::Validation` for malformed pairs,
/// `ProjectError::MalformedVolume` for bad volumes, or a store error.
pub async fn run(args: InitArgs, app: &AppContext) -> Result<ExitCode> {
    let mut project = build_project(args, &app.cwd)?;
    app.store.save(&mut project).await?;

    let ctx = &app.output;
    ctx.success(&format!("Project '{}' saved.", project.name));
    ctx.kv("Path", &project.path.display().to_string());
    ctx.kv("Type", &project.kind.to_string());
    ctx.kv("Container", &project.container_name());
    ctx.info("Start it: dockyard start");
    Ok(ExitCode::SUCCESS)
}

/// Assemble a project for `dir` from the command-line arguments.
///
/// # Errors
///
/// Returns a `ProjectError` when a pair or volume is malformed or the
/// directory has no usable name.
pub fn build_project(args: InitArgs, dir: &Path) -> Result<Project, ProjectError> {
    let name = match args.name {
        Some(name) => name,
        None => dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ProjectError::Validation(format!(
                    "cannot derive a name from {}; pass --name",
                    dir.display()
                ))
            })?,
    };

    for raw in &args.volumes {
        raw.parse::<VolumeSpec>()?;
    }

    let kind = args.kind.unwrap_or(if args.dockerfile.is_some() {
        ProjectType::Dockerfile
    } else {
        ProjectType::Generic
    });

    let mut project = Project::new(name, dir);
    project.kind = kind;
    project.image_name = args.image;
    project.dockerfile = args.dockerfile;
    project.env = parse_pairs("--env", &args.env)?;
    project.build_args = parse_pairs("--build-arg", &args.build_args)?;
    project.extra_hosts = parse_pairs("--extra-host", &args.extra_hosts)?;
    project.ports = args.ports;
    project.volumes = args.volumes;
    Ok(project)
}

/// Parse `KEY=VALUE` pairs. The value may itself contain `=`.
fn parse_pairs(flag: &str, raw: &[String]) -> Result<BTreeMap<String, String>, ProjectError> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
            _ => Err(ProjectError::Validation(format!(
                "{flag} expects KEY=VALUE, got '{pair}'"
            ))),
        })
        .collect()
}
