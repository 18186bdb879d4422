//! Infrastructure implementation of the `DockerGateway` port.
//!
//! `DockerCli<R>` drives the `docker` CLI through a `CommandRunner`, so tests
//! can inject a recording runner without a Docker daemon.

use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, DockerGateway};
use crate::domain::{BuildSpec, ContainerRef, ContainerSpec, ContainerStatus, EngineError};
use crate::infra::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};

const DOCKER: &str = "docker";

/// Image builds can pull base layers and run arbitrary steps.
pub const BUILD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

pub struct DockerCli<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DockerCli<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    async fn docker(&self, operation: &str, args: &[&str]) -> Result<Output> {
        let output = self.runner.run(DOCKER, args).await?;
        check(operation, output)
    }
}

impl DockerCli<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn default_runner() -> Self {
        Self::new(TokioCommandRunner::new(DEFAULT_CMD_TIMEOUT))
    }
}

impl<R: CommandRunner> DockerGateway for DockerCli<R> {
    async fn get_container(&self, name: &str) -> Result<Option<ContainerRef>> {
        let output = self
            .runner
            .run(DOCKER, &["container", "inspect", "--format", "{{.Id}}", name])
            .await?;
        if !output.status.success() && reports_missing(&output, "no such container") {
            return Ok(None);
        }
        let output = check("container inspect", output)?;
        Ok(Some(ContainerRef {
            id: stdout_trimmed(&output),
            name: name.to_owned(),
        }))
    }

    async fn create_container(&self, spec: &ContainerSpec) -> Result<ContainerRef> {
        let args = create_args(spec);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self.docker("container create", &arg_refs).await?;
        Ok(ContainerRef {
            id: stdout_trimmed(&output),
            name: spec.name.clone(),
        })
    }

    async fn inspect_container(&self, name: &str) -> Result<ContainerStatus> {
        let output = self
            .docker(
                "container inspect",
                &["container", "inspect", "--format", "{{.State.Status}}", name],
            )
            .await?;
        Ok(ContainerStatus::parse(&stdout_trimmed(&output)))
    }

    async fn start_container(&self, name: &str) -> Result<()> {
        self.docker("container start", &["container", "start", name])
            .await?;
        Ok(())
    }

    async fn remove_container(&self, name: &str) -> Result<()> {
        self.docker("container rm", &["container", "rm", "--force", name])
            .await?;
        Ok(())
    }

    async fn image_ls(&self, tag: &str) -> Result<Vec<String>> {
        let filter = format!("reference={tag}");
        let output = self
            .docker(
                "image ls",
                &["image", "ls", "--filter", &filter, "--format", "{{.ID}}"],
            )
            .await?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect())
    }

    async fn image_rm(&self, tag: &str) -> Result<()> {
        let output = self.runner.run(DOCKER, &["image", "rm", tag]).await?;
        if !output.status.success() && reports_missing(&output, "no such image") {
            tracing::debug!(%tag, "image already absent");
            return Ok(());
        }
        check("image rm", output)?;
        Ok(())
    }

    async fn build_image(&self, spec: &BuildSpec) -> Result<()> {
        let args = build_args(spec);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self
            .runner
            .run_with_timeout(DOCKER, &arg_refs, BUILD_TIMEOUT)
            .await?;
        check("build", output)?;
        Ok(())
    }
}

/// Arguments for `docker container create`.
#[must_use]
pub fn create_args(spec: &ContainerSpec) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "container".into(),
        "create".into(),
        "--name".into(),
        spec.name.clone(),
    ];
    for (key, value) in &spec.env {
        args.push("-e".into());
        args.push(format!("{key}={value}"));
    }
    for port in &spec.ports {
        args.push("-p".into());
        args.push(port.clone());
    }
    for volume in &spec.volumes {
        args.push("-v".into());
        args.push(volume.clone());
    }
    for entry in &spec.extra_hosts {
        args.push("--add-host".into());
        args.push(add_host_flag(entry));
    }
    args.push(spec.image.clone());
    args
}

/// Arguments for `docker build`. The Dockerfile is anchored at the context
/// because `-f` is otherwise relative to the process working directory.
#[must_use]
pub fn build_args(spec: &BuildSpec) -> Vec<String> {
    let mut args: Vec<String> = vec!["build".into(), "-t".into(), spec.tag.clone()];
    if let Some(dockerfile) = &spec.dockerfile {
        args.push("-f".into());
        args.push(spec.context.join(dockerfile).to_string_lossy().into_owned());
    }
    for (key, value) in &spec.build_args {
        args.push("--build-arg".into());
        args.push(format!("{key}={value}"));
    }
    args.push(spec.context.to_string_lossy().into_owned());
    args
}

/// The CLI flag takes `host:ip`; engine entries are `ip:hostname`.
/// Hostnames never contain `:`, so the last colon separates the two even
/// for IPv6 addresses.
fn add_host_flag(entry: &str) -> String {
    match entry.rsplit_once(':') {
        Some((ip, hostname)) => format!("{hostname}:{ip}"),
        None => entry.to_owned(),
    }
}

fn check(operation: &str, output: Output) -> Result<Output> {
    if output.status.success() {
        return Ok(output);
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    let detail = if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr
    };
    Err(EngineError::new(operation, detail).into())
}

fn reports_missing(output: &Output, needle: &str) -> bool {
    String::from_utf8_lossy(&output.stderr)
        .to_lowercase()
        .contains(needle)
}

fn stdout_trimmed(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}
