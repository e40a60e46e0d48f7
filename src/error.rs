// ABOUTME: Application-wide error types for simpledeploy.
// ABOUTME: Wraps every failure that aborts a run; cleanup warnings never end up here.

use crate::config::ConfigError;
use crate::deploy::DeployError;
use crate::vcs::VcsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Vcs(#[from] VcsError),

    #[error(transparent)]
    Deploy(#[from] DeployError),
}

pub type Result<T> = std::result::Result<T, Error>;
