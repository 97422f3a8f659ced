//! Environment variable layer of Settings::load.
//!
//! Kept in its own test binary: the variables are process-wide and would leak
//! into the file-based config tests running in parallel.

use std::env;
use std::fs;

use tempfile::TempDir;

use treecheck::config::{local_config_path, Settings};
use treecheck::domain::CycleStrategy;

#[test]
fn given_env_vars_when_load_then_override_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        "max_children = 3\ncycle_strategy = \"memoized\"\n",
    )
    .unwrap();

    env::set_var("TREECHECK_MAX_CHILDREN", "5");
    env::set_var("TREECHECK_EMPTY_IS_TREE", "false");
    env::set_var("TREECHECK_CYCLE_STRATEGY", "path-local");
    let loaded = Settings::load(Some(dir.path()));
    env::remove_var("TREECHECK_MAX_CHILDREN");
    env::remove_var("TREECHECK_EMPTY_IS_TREE");
    env::remove_var("TREECHECK_CYCLE_STRATEGY");

    let settings = loaded.expect("load settings");
    assert_eq!(settings.max_children, 5);
    assert!(!settings.empty_is_tree);
    assert_eq!(settings.cycle_strategy, CycleStrategy::PathLocal);

    env::set_var("TREECHECK_MAX_CHILDREN", "lots");
    let loaded = Settings::load(Some(dir.path()));
    env::remove_var("TREECHECK_MAX_CHILDREN");

    let err = loaded.unwrap_err();
    assert!(err.to_string().contains("TREECHECK_MAX_CHILDREN"));
}
