//! Property-based tests for the pure container-spec helpers.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;

use dockyard_cli::domain::{ProjectError, extra_host_entries, merge_env, resolve_volume};

const BASE: &str = "/home/u/p";

proptest! {
    /// Absolute sources pass through byte-for-byte, options included.
    #[test]
    fn prop_absolute_volume_unchanged(
        src in "/[a-z]{1,8}(/[a-z0-9]{1,8}){0,3}",
        dest in "/[a-z]{1,8}",
        opts in proptest::option::of("(ro|rw|z|cached)"),
    ) {
        let raw = match &opts {
            Some(o) => format!("{src}:{dest}:{o}"),
            None => format!("{src}:{dest}"),
        };
        let resolved = resolve_volume(&raw, Path::new(BASE)).expect("valid volume");
        prop_assert_eq!(resolved, raw);
    }

    /// Relative sources are anchored under the project directory.
    #[test]
    fn prop_relative_volume_anchored(
        src in "[a-z]{1,8}(/[a-z0-9]{1,8}){0,2}",
        dest in "/[a-z]{1,8}",
    ) {
        let resolved = resolve_volume(&format!("{src}:{dest}"), Path::new(BASE))
            .expect("valid volume");
        prop_assert_eq!(resolved, format!("{BASE}/{src}:{dest}"));
    }

    /// Strings with four or more colon-separated parts never parse.
    #[test]
    fn prop_too_many_parts_rejected(parts in proptest::collection::vec("[a-z]{1,4}", 4..7)) {
        let raw = parts.join(":");
        prop_assert_eq!(
            resolve_volume(&raw, Path::new(BASE)),
            Err(ProjectError::MalformedVolume(raw.clone()))
        );
    }

    /// Merged env holds every key from both sides, and project values win.
    #[test]
    fn prop_merge_env_project_wins(
        global in proptest::collection::btree_map("[A-Z]{1,3}", "[a-z0-9]{0,4}", 0..8),
        project in proptest::collection::btree_map("[A-Z]{1,3}", "[a-z0-9]{0,4}", 0..8),
    ) {
        let merged = merge_env(&global, &project);
        for (k, v) in &project {
            prop_assert_eq!(merged.get(k), Some(v));
        }
        for (k, v) in &global {
            if !project.contains_key(k) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
        let expected_len = global.keys().chain(project.keys()).collect::<std::collections::BTreeSet<_>>().len();
        prop_assert_eq!(merged.len(), expected_len);
    }

    /// Each host entry is `ip:hostname`, one per map entry.
    #[test]
    fn prop_extra_hosts_inverted(
        hosts in proptest::collection::btree_map("[a-z]{1,6}\\.local", "10\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}", 0..5),
    ) {
        let entries = extra_host_entries(&hosts);
        prop_assert_eq!(entries.len(), hosts.len());
        for (entry, (host, ip)) in entries.iter().zip(&hosts) {
            prop_assert_eq!(entry, &format!("{ip}:{host}"));
        }
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        resolve_volume("data:/data", Path::new(BASE)).expect("valid"),
        "/home/u/p/data:/data"
    );
    assert_eq!(
        resolve_volume("/abs:/data:ro", Path::new(BASE)).expect("valid"),
        "/abs:/data:ro"
    );

    let global = BTreeMap::from([("A".to_string(), "1".to_string())]);
    let project = BTreeMap::from([
        ("A".to_string(), "2".to_string()),
        ("B".to_string(), "3".to_string()),
    ]);
    assert_eq!(merge_env(&global, &project), project);

    let hosts = BTreeMap::from([("db.local".to_string(), "10.0.0.5".to_string())]);
    assert_eq!(extra_host_entries(&hosts), vec!["10.0.0.5:db.local"]);
}
