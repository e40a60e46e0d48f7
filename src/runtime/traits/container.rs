// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: Launch, stop, and force-remove single containers by name.

use super::shared_types::{ContainerId, RunConfig};
use crate::runtime::RuntimeError;
use crate::types::ContainerName;
use async_trait::async_trait;
use std::time::Duration;

/// Container lifecycle operations.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// Launch a detached container. Fails if the launch command fails.
    async fn run_container(&self, config: &RunConfig) -> Result<ContainerId, RuntimeError>;

    /// Stop a running container, waiting up to `timeout` before killing it.
    async fn stop_container(
        &self,
        name: &ContainerName,
        timeout: Duration,
    ) -> Result<(), RuntimeError>;

    /// Force-remove a container, running or not.
    async fn remove_container(&self, name: &ContainerName) -> Result<(), RuntimeError>;
}
