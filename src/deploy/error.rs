// ABOUTME: Error types for deployment operations.
// ABOUTME: Only launch failures are fatal; cleanup failures become warnings.

use crate::runtime::RuntimeError;
use crate::types::{ContainerName, PodName};

/// A pod or container could not be launched.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// `pod create` failed; nothing was started.
    #[error("failed to create pod {pod}: {source}")]
    PodCreate {
        pod: PodName,
        #[source]
        source: RuntimeError,
    },

    /// A container failed to launch; containers started before it keep running.
    #[error("failed to launch container {container}: {source}")]
    ContainerLaunch {
        container: ContainerName,
        #[source]
        source: RuntimeError,
    },
}

impl DeployError {
    /// The runtime failure underneath.
    pub fn runtime_error(&self) -> &RuntimeError {
        match self {
            DeployError::PodCreate { source, .. } | DeployError::ContainerLaunch { source, .. } => {
                source
            }
        }
    }
}
