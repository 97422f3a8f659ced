//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treecheck/treecheck.toml`
//! 3. Local config: `<project_dir>/.treecheck.toml`
//! 4. Environment variables: `TREECHECK_*` prefix
//!
//! CLI flags are applied on top by the cli layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{CycleStrategy, ValidationOptions, BINARY_ARITY};

/// Unified configuration for treecheck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Children allowed per node (default: 2)
    pub max_children: usize,
    /// Whether an empty edge list counts as a tree (default: true)
    pub empty_is_tree: bool,
    /// Cycle detection walk (default: memoized)
    pub cycle_strategy: CycleStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_children: BINARY_ARITY,
            empty_is_tree: true,
            cycle_strategy: CycleStrategy::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub max_children: Option<usize>,
    pub empty_is_tree: Option<bool>,
    pub cycle_strategy: Option<CycleStrategy>,
}

/// Get the XDG config directory for treecheck.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treecheck").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treecheck.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".treecheck.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            max_children: overlay.max_children.unwrap_or(self.max_children),
            empty_is_tree: overlay.empty_is_tree.unwrap_or(self.empty_is_tree),
            cycle_strategy: overlay.cycle_strategy.unwrap_or(self.cycle_strategy),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.treecheck.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Load from a single file on top of defaults, skipping global and env layers.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        let settings = Self::default().merge_with(&raw);
        settings.validate()?;
        Ok(settings)
    }

    /// Apply TREECHECK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREECHECK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("max_children") {
            settings.max_children = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("TREECHECK_MAX_CHILDREN={}: {}", val, e),
            })?;
        }
        if let Ok(val) = config.get_string("empty_is_tree") {
            settings.empty_is_tree = val.trim().parse().map_err(|e| ApplicationError::Config {
                message: format!("TREECHECK_EMPTY_IS_TREE={}: {}", val, e),
            })?;
        }
        if let Ok(val) = config.get_string("cycle_strategy") {
            settings.cycle_strategy = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }

        Ok(settings)
    }

    /// Reject settings the validator cannot work with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_children == 0 {
            return Err(ApplicationError::Config {
                message: "max_children must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            max_children: self.max_children,
            empty_is_tree: self.empty_is_tree,
            cycle_strategy: self.cycle_strategy,
        }
    }

    /// Render as TOML, e.g. for `config show`.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
