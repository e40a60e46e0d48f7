// ABOUTME: Configuration types and parsing for simpledeploy.
// ABOUTME: Loads the process config JSON and the app config kept in the repository.

mod app;
mod deserialize;
mod error;
mod repo;
mod runtime;
mod secret;

pub use app::{AppConfig, ContainerEntry};
pub use error::{ConfigError, Result};
pub use repo::{GitAuth, RepoConfig};
pub use runtime::RuntimeSettings;
pub use secret::SecretValue;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// Absolute directory holding the config file at `path`.
///
/// A bare file name resolves to the current directory.
pub fn config_dir(path: &Path) -> Result<PathBuf> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::path::absolute(parent),
        None => std::env::current_dir(),
    }
    .map_err(|source| ConfigError::ConfigDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Process-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub repo: RepoConfig,

    #[serde(default)]
    pub runtime: RuntimeSettings,
}

impl Config {
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Checkout directory with a relative `repo.dir` resolved against `base`.
    pub fn checkout_dir(&self, base: &Path) -> PathBuf {
        if self.repo.dir.is_absolute() {
            self.repo.dir.clone()
        } else {
            base.join(&self.repo.dir)
        }
    }
}
