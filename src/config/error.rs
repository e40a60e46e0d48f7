// ABOUTME: Configuration error type shared by the process and app config loaders.
// ABOUTME: Every variant is fatal and raised before any container operation.

use crate::types::NameError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot resolve config directory {path}: {source}")]
    ConfigDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid name in {field}: {source}")]
    InvalidName {
        field: String,
        #[source]
        source: NameError,
    },

    #[error("container name '{0}' is used more than once in the pod")]
    DuplicateContainer(String),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("git authentication is required but {0} is not set")]
    MissingCredential(&'static str),

    #[error("repository URL must include a scheme (e.g. https://) to carry credentials: {0}")]
    UrlWithoutScheme(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
