// ABOUTME: Pod-level orchestration: create, start in dependency order, stop, remove.
// ABOUTME: Pod removal is a bounded retry loop with an explicit abandoned outcome.

use std::time::Duration;

use crate::config::RuntimeSettings;
use crate::diagnostics::{Diagnostics, Warning};
use crate::resources::{PodSpec, Role};
use crate::runtime::{ContainerId, FullRuntime, PodOps};
use crate::types::PodName;

use super::container::{create_volumes, start_container, stop_container};
use super::error::DeployError;

/// How hard to try removing a pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalPolicy {
    /// Total attempts, at least one is always made.
    pub attempts: u32,
    /// Budget for each attempt.
    pub timeout: Duration,
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Timeouts used when tearing a pod down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopPolicy {
    /// Grace period given to each container before it is killed.
    pub container_timeout: Duration,
    pub removal: RemovalPolicy,
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self {
            container_timeout: Duration::from_secs(10),
            removal: RemovalPolicy::default(),
        }
    }
}

impl From<&RuntimeSettings> for StopPolicy {
    fn from(settings: &RuntimeSettings) -> Self {
        Self {
            container_timeout: settings.stop_timeout,
            removal: RemovalPolicy {
                attempts: settings.pod_remove_attempts,
                timeout: settings.pod_remove_timeout,
            },
        }
    }
}

/// Result of [`remove_pod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodRemoval {
    Removed { attempts: u32 },
    Abandoned { attempts: u32 },
}

impl PodRemoval {
    pub fn attempts(&self) -> u32 {
        match self {
            PodRemoval::Removed { attempts } | PodRemoval::Abandoned { attempts } => *attempts,
        }
    }
}

/// Create the pod, then start services in order and the primary last.
///
/// Returns the launched container IDs in start order. Containers started
/// before a launch failure are left running.
pub async fn start_pod<R: FullRuntime>(
    runtime: &R,
    pod: &PodSpec,
    diag: &mut Diagnostics,
) -> Result<Vec<ContainerId>, DeployError> {
    let ports = pod.ports();
    tracing::info!("creating pod {} with ports {:?}", pod.name, ports);
    runtime
        .create_pod(&pod.name, &ports)
        .await
        .map_err(|source| DeployError::PodCreate {
            pod: pod.name.clone(),
            source,
        })?;

    create_volumes(runtime, &pod.volumes, diag).await;

    let mut started = Vec::with_capacity(pod.services.len() + 1);
    for service in &pod.services {
        started.push(start_container(runtime, service, &pod.name, Role::Service, diag).await?);
    }
    started.push(start_container(runtime, &pod.primary, &pod.name, Role::Primary, diag).await?);

    Ok(started)
}

/// Stop the primary, then each service in order, then remove the pod.
///
/// Never fails: on a host where nothing is running this only collects
/// warnings.
pub async fn stop_pod<R: FullRuntime>(
    runtime: &R,
    pod: &PodSpec,
    policy: &StopPolicy,
    diag: &mut Diagnostics,
) -> PodRemoval {
    tracing::info!("stopping pod {}", pod.name);
    for (container, _) in pod.containers() {
        stop_container(runtime, &container.name, policy.container_timeout, diag).await;
    }
    remove_pod(runtime, &pod.name, &policy.removal, diag).await
}

/// Force-remove a pod, retrying up to `policy.attempts` times.
pub async fn remove_pod<R: PodOps>(
    runtime: &R,
    name: &PodName,
    policy: &RemovalPolicy,
    diag: &mut Diagnostics,
) -> PodRemoval {
    let max = policy.attempts.max(1);
    let mut last_error = None;

    for attempt in 1..=max {
        match runtime.remove_pod(name, policy.timeout).await {
            Ok(()) => {
                tracing::debug!("removed pod {} on attempt {}", name, attempt);
                return PodRemoval::Removed { attempts: attempt };
            }
            Err(e) => {
                tracing::debug!("pod {} removal attempt {}/{} failed: {}", name, attempt, max, e);
                last_error = Some(e);
            }
        }
    }

    let reason = last_error.map(|e| e.to_string()).unwrap_or_default();
    diag.warn(Warning::pod_remove(format!(
        "giving up on removing pod {name} after {max} attempts: {reason}"
    )));
    PodRemoval::Abandoned { attempts: max }
}
