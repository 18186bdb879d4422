//! Tests for `JsonConfigStore` against a temporary data root.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use dockyard_cli::application::ports::AppConfigStore;
use dockyard_cli::domain::AppConfig;
use dockyard_cli::infra::config::JsonConfigStore;

#[tokio::test]
async fn missing_config_loads_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonConfigStore::with_root(dir.path().join("not-yet-created"));

    let config = store.load().await.expect("load");

    assert_eq!(config, AppConfig::default());
}

#[tokio::test]
async fn save_creates_root_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("data");
    let store = JsonConfigStore::with_root(root.clone());
    let mut config = AppConfig {
        env: BTreeMap::from([("EDITOR".into(), "vim".into())]),
        debug: true,
        ..AppConfig::default()
    };
    config.add_project("shop", "shop", "/w/shop");

    store.save(&config).await.expect("save");

    assert!(root.join("config.json").exists());
    assert!(!root.join("config.json.tmp").exists());
    assert_eq!(store.load().await.expect("load"), config);
}

#[tokio::test]
async fn legacy_index_with_src_key_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"env":{},"projects":[{"id":"old","name":"old","src":"/w/old"}]}"#,
    )
    .expect("write legacy config");
    let store = JsonConfigStore::with_root(dir.path().to_path_buf());

    let config = store.load().await.expect("load");

    let entry = config.find_project("old").expect("entry");
    assert_eq!(entry.path, PathBuf::from("/w/old"));
}

#[tokio::test]
async fn corrupt_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("config.json"), "[1, 2").expect("write");
    let store = JsonConfigStore::with_root(dir.path().to_path_buf());

    let err = store.load().await.expect_err("should fail");

    assert!(format!("{err:#}").contains("parsing config file"));
}

#[test]
fn data_path_joins_segments_under_root() {
    let store = JsonConfigStore::with_root(PathBuf::from("/data"));

    assert_eq!(
        store.data_path(&["projects", "shop", "config.json"]),
        PathBuf::from("/data/projects/shop/config.json")
    );
    assert_eq!(store.data_path(&[]), PathBuf::from("/data"));
}
