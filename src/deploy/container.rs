// ABOUTME: Single-container lifecycle: volume creation, launch, and teardown.
// ABOUTME: Launch failures are fatal; every teardown failure becomes a warning.

use std::time::Duration;

use crate::diagnostics::{Diagnostics, Warning};
use crate::resources::{ContainerSpec, Role};
use crate::runtime::{ContainerId, ContainerOps, VolumeOps};
use crate::types::{ContainerName, PodName, VolumeName};

use super::error::DeployError;

/// Where a container is in its lifecycle, as seen by this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerPhase {
    Absent,
    Starting,
    Running,
    Stopping,
    Removed,
}

fn enter(name: &ContainerName, phase: ContainerPhase) {
    tracing::debug!("container {} -> {:?}", name, phase);
}

/// Create each named volume, skipping the ones the runtime refuses.
pub async fn create_volumes<R: VolumeOps>(
    runtime: &R,
    names: &[VolumeName],
    diag: &mut Diagnostics,
) {
    for name in names {
        match runtime.create_volume(name).await {
            Ok(()) => tracing::info!("created volume {}", name),
            Err(e) => diag.warn(Warning::volume_create(format!(
                "could not create volume {name}: {e}"
            ))),
        }
    }
}

/// Create the container's volumes, then launch it detached inside `pod`.
pub async fn start_container<R: ContainerOps + VolumeOps>(
    runtime: &R,
    spec: &ContainerSpec,
    pod: &PodName,
    role: Role,
    diag: &mut Diagnostics,
) -> Result<ContainerId, DeployError> {
    create_volumes(runtime, &spec.volume_names, diag).await;

    enter(&spec.name, ContainerPhase::Starting);
    match runtime.run_container(&spec.run_config(pod, role)).await {
        Ok(id) => {
            enter(&spec.name, ContainerPhase::Running);
            tracing::info!("started {} {} ({})", role.as_str(), spec.name, id.short());
            Ok(id)
        }
        Err(source) => {
            enter(&spec.name, ContainerPhase::Absent);
            Err(DeployError::ContainerLaunch {
                container: spec.name.clone(),
                source,
            })
        }
    }
}

/// Stop a container gracefully, then force-remove it.
///
/// Removal is attempted exactly once whether or not the stop succeeded. A
/// container that never existed only produces warnings.
pub async fn stop_container<R: ContainerOps>(
    runtime: &R,
    name: &ContainerName,
    timeout: Duration,
    diag: &mut Diagnostics,
) {
    enter(name, ContainerPhase::Stopping);
    match runtime.stop_container(name, timeout).await {
        Ok(()) => tracing::info!("stopped container {}", name),
        Err(e) => diag.warn(Warning::container_stop(format!(
            "could not stop container {name}: {e}"
        ))),
    }

    match runtime.remove_container(name).await {
        Ok(()) => tracing::info!("removed container {}", name),
        Err(e) => diag.warn(Warning::container_remove(format!(
            "could not remove container {name}: {e}"
        ))),
    }
    enter(name, ContainerPhase::Removed);
}
