// ABOUTME: The app config file that lives inside the tracked repository.
// ABOUTME: Raw serde shape; validation happens when the pod spec is built.

use super::deserialize::{deserialize_command, deserialize_env};
use super::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub app: Option<ContainerEntry>,

    #[serde(default)]
    pub services: Vec<ContainerEntry>,

    /// Named volumes shared by the whole pod.
    #[serde(default)]
    pub volumes: Vec<String>,
}

/// One container as written in the app config, for the primary and services alike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerEntry {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "deserialize_command")]
    pub command: Option<String>,

    #[serde(default)]
    pub ports: Vec<String>,

    #[serde(default)]
    pub volumes: Vec<String>,

    #[serde(default)]
    pub volume_names: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_env")]
    pub env: Vec<String>,

    #[serde(default)]
    pub workdir: Option<String>,
}

impl AppConfig {
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
}
