//! Tests for the `DockerCli` adapter using a scripted command runner.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use dockyard_cli::application::ports::DockerGateway;
use dockyard_cli::domain::{BuildSpec, ContainerSpec, ContainerStatus, EngineError};
use dockyard_cli::infra::docker::{BUILD_TIMEOUT, DockerCli};

use crate::helpers::{err_output, ok_output};
use crate::mocks::ScriptedRunner;

#[tokio::test]
async fn get_container_maps_no_such_container_to_none() {
    let runner = ScriptedRunner::new([err_output(
        1,
        b"Error response from daemon: No such container: p.workspace",
    )]);
    let docker = DockerCli::new(&runner);

    let found = docker.get_container("p.workspace").await.expect("lookup");

    assert!(found.is_none());
    let calls = runner.calls();
    assert_eq!(calls[0].0, "docker");
    assert_eq!(
        calls[0].1,
        vec!["container", "inspect", "--format", "{{.Id}}", "p.workspace"]
    );
}

#[tokio::test]
async fn get_container_returns_reference_with_id() {
    let runner = ScriptedRunner::new([ok_output(b"abc123\n")]);
    let docker = DockerCli::new(&runner);

    let found = docker
        .get_container("p.workspace")
        .await
        .expect("lookup")
        .expect("exists");

    assert_eq!(found.id, "abc123");
    assert_eq!(found.name, "p.workspace");
}

#[tokio::test]
async fn get_container_surfaces_other_failures_as_engine_error() {
    let runner = ScriptedRunner::new([err_output(
        1,
        b"Cannot connect to the Docker daemon at unix:///var/run/docker.sock",
    )]);
    let docker = DockerCli::new(&runner);

    let err = docker.get_container("p.workspace").await.expect_err("fails");

    let engine = err.downcast_ref::<EngineError>().expect("engine error");
    assert_eq!(engine.operation, "container inspect");
    assert!(engine.detail.contains("Cannot connect"));
}

#[tokio::test]
async fn inspect_container_parses_status() {
    let runner = ScriptedRunner::new([ok_output(b"exited\n"), ok_output(b"paused\n")]);
    let docker = DockerCli::new(&runner);

    assert_eq!(
        docker.inspect_container("p.workspace").await.expect("inspect"),
        ContainerStatus::Exited
    );
    assert_eq!(
        docker.inspect_container("p.workspace").await.expect("inspect"),
        ContainerStatus::Other("paused".into())
    );
}

#[tokio::test]
async fn create_container_passes_inverted_extra_hosts() {
    let runner = ScriptedRunner::new([ok_output(b"deadbeef\n")]);
    let docker = DockerCli::new(&runner);
    let spec = ContainerSpec {
        name: "p.workspace".into(),
        image: "node:20".into(),
        extra_hosts: vec!["10.0.0.5:db.local".into()],
        ..ContainerSpec::default()
    };

    let created = docker.create_container(&spec).await.expect("create");

    assert_eq!(created.id, "deadbeef");
    let args = &runner.calls()[0].1;
    let pos = args
        .iter()
        .position(|a| a == "--add-host")
        .expect("--add-host flag");
    assert_eq!(args[pos + 1], "db.local:10.0.0.5");
    assert_eq!(args.last().map(String::as_str), Some("node:20"));
}

#[tokio::test]
async fn remove_container_forces_removal() {
    let runner = ScriptedRunner::new([ok_output(b"")]);
    let docker = DockerCli::new(&runner);

    docker.remove_container("p.workspace").await.expect("remove");

    assert_eq!(
        runner.calls()[0].1,
        vec!["container", "rm", "--force", "p.workspace"]
    );
}

#[tokio::test]
async fn image_ls_returns_one_entry_per_line() {
    let runner = ScriptedRunner::new([ok_output(b"sha1\nsha2\n\n")]);
    let docker = DockerCli::new(&runner);

    let images = docker.image_ls("project-p:develop").await.expect("ls");

    assert_eq!(images, vec!["sha1", "sha2"]);
    assert!(runner.calls()[0]
        .1
        .contains(&"reference=project-p:develop".to_string()));
}

#[tokio::test]
async fn image_rm_treats_missing_image_as_success() {
    let runner = ScriptedRunner::new([err_output(
        1,
        b"Error response from daemon: No such image: project-p:develop",
    )]);
    let docker = DockerCli::new(&runner);

    docker.image_rm("project-p:develop").await.expect("absent is ok");
}

#[tokio::test]
async fn image_rm_propagates_conflicts() {
    let runner = ScriptedRunner::new([err_output(
        1,
        b"Error response from daemon: conflict: unable to remove repository reference",
    )]);
    let docker = DockerCli::new(&runner);

    let err = docker.image_rm("project-p:develop").await.expect_err("fails");

    assert!(err.downcast_ref::<EngineError>().is_some());
}

#[tokio::test]
async fn build_image_uses_build_timeout() {
    let runner = ScriptedRunner::new([ok_output(b"")]);
    let docker = DockerCli::new(&runner);
    let spec = BuildSpec {
        tag: "project-p:develop".into(),
        build_args: BTreeMap::new(),
        context: PathBuf::from("/home/u/p"),
        dockerfile: Some("Dockerfile".into()),
    };

    docker.build_image(&spec).await.expect("build");

    let (program, args, timeout) = runner.calls().remove(0);
    assert_eq!(program, "docker");
    assert_eq!(args[0], "build");
    assert_eq!(timeout, Some(BUILD_TIMEOUT));
}

#[tokio::test]
async fn failure_without_stderr_reports_exit_status() {
    let runner = ScriptedRunner::new([err_output(125, b"")]);
    let docker = DockerCli::new(&runner);

    let err = docker.start_container("p.workspace").await.expect_err("fails");

    let engine = err.downcast_ref::<EngineError>().expect("engine error");
    assert_eq!(engine.operation, "container start");
    assert!(engine.detail.contains("125"), "detail: {}", engine.detail);
}
