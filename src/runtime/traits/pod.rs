// ABOUTME: Pod operations trait for container runtimes.
// ABOUTME: Create a pod with its published ports, force-remove it under a timeout.

use crate::runtime::RuntimeError;
use crate::types::PodName;
use async_trait::async_trait;
use std::time::Duration;

/// Pod operations.
#[async_trait]
pub trait PodOps: Send + Sync {
    /// Create a pod publishing `ports` (`host:container`).
    async fn create_pod(&self, name: &PodName, ports: &[String]) -> Result<(), RuntimeError>;

    /// Force-remove a pod and anything left in it. Gives up with
    /// `RuntimeError::TimedOut` after `timeout`.
    async fn remove_pod(&self, name: &PodName, timeout: Duration) -> Result<(), RuntimeError>;
}
