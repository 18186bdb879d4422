//! Tests for `ProjectResolver` lookups against an in-memory index.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use dockyard_cli::application::ports::AppConfigStore;
use dockyard_cli::application::services::{ProjectResolver, ProjectStore, SearchFilter};
use dockyard_cli::domain::{AppConfig, Project, ProjectError};

use crate::mocks::{MemoryConfigStore, MemoryFs};

type Store = ProjectStore<MemoryConfigStore, MemoryFs>;

/// Store with projects `a` at `/w/a` and `b` at `/w/b`.
async fn seeded() -> Store {
    let store = ProjectStore::new(MemoryConfigStore::default(), MemoryFs::default());
    for name in ["a", "b"] {
        let mut project = Project::new(name, PathBuf::from("/w").join(name));
        project.image_name = Some(format!("img-{name}"));
        store.save(&mut project).await.expect("seed");
    }
    store
}

fn is_not_found(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ProjectError>(),
        Some(ProjectError::NotFound(_))
    )
}

#[tokio::test]
async fn get_finds_project_by_working_directory() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    let project = resolver.get(Path::new("/w/b")).await.expect("found");

    assert_eq!(project.id, "b");
    assert_eq!(project.image_name.as_deref(), Some("img-b"));
    assert_eq!(project.path, PathBuf::from("/w/b"));
}

#[tokio::test]
async fn get_fails_with_not_found_outside_projects() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    let err = resolver.get(Path::new("/elsewhere")).await.expect_err("missing");

    assert!(is_not_found(&err));
}

#[tokio::test]
async fn get_by_id_takes_path_from_index() {
    let store = seeded().await;
    let mut config = store.config().snapshot();
    config.add_project("a", "a", "/moved/a");
    store.config().save(&config).await.expect("reseed");
    let resolver = ProjectResolver::new(&store);

    let project = resolver.get_by_id("a").await.expect("found");

    assert_eq!(project.path, PathBuf::from("/moved/a"));
}

#[tokio::test]
async fn get_by_id_fails_when_index_or_record_missing() {
    let store = ProjectStore::new(
        MemoryConfigStore::new({
            let mut config = AppConfig::default();
            config.add_project("dangling", "dangling", "/w/dangling");
            config
        }),
        MemoryFs::default(),
    );
    let resolver = ProjectResolver::new(&store);

    assert!(is_not_found(&resolver.get_by_id("ghost").await.expect_err("no entry")));
    assert!(is_not_found(&resolver.get_by_id("dangling").await.expect_err("no record")));
}

#[tokio::test]
async fn search_by_name_checks_hydrated_record_not_stale_index() {
    let store = seeded().await;
    let mut config = store.config().snapshot();
    // Index still says "x" for project a, but its record was renamed.
    config.add_project("a", "x", "/w/a");
    config.add_project("b", "", "/w/b");
    store.config().save(&config).await.expect("reseed");
    let resolver = ProjectResolver::new(&store);

    assert!(resolver
        .search(&SearchFilter::by_name("x"))
        .await
        .expect("search")
        .is_empty());

    let found = resolver
        .search(&SearchFilter::by_name("b"))
        .await
        .expect("search");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "b");
}

#[tokio::test]
async fn search_without_criteria_returns_all_in_index_order() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    let ids: Vec<String> = resolver
        .search(&SearchFilter::default())
        .await
        .expect("search")
        .into_iter()
        .map(|p| p.id)
        .collect();

    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn search_combines_id_and_path() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);
    let filter = SearchFilter {
        id: Some("a".into()),
        path: Some(PathBuf::from("/w/b")),
        ..SearchFilter::default()
    };

    assert!(resolver.search(&filter).await.expect("search").is_empty());
}

#[tokio::test]
async fn search_one_returns_none_instead_of_error() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    let found = resolver
        .search_one(&SearchFilter::by_name("nobody"))
        .await
        .expect("search");

    assert!(found.is_none());
}

#[tokio::test]
async fn by_name_returns_hydrated_project_or_not_found() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    let project = resolver.by_name("b").await.expect("found");
    assert_eq!(project.id, "b");
    assert_eq!(project.image_name.as_deref(), Some("img-b"));
    assert_eq!(project.path, PathBuf::from("/w/b"));

    let err = resolver.by_name("nobody").await.expect_err("missing");
    assert!(is_not_found(&err));
    assert!(err.to_string().contains("no project named 'nobody'"));
}

#[tokio::test]
async fn path_of_resolves_name_to_directory() {
    let store = seeded().await;
    let resolver = ProjectResolver::new(&store);

    assert_eq!(
        resolver.path_of("a").await.expect("found"),
        PathBuf::from("/w/a")
    );
    assert!(is_not_found(
        &resolver.path_of("nobody").await.expect_err("missing")
    ));
}
