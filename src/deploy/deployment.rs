// ABOUTME: Generic deployment struct parameterized by state marker.
// ABOUTME: Transitions consume self, so a pod can only start after it was stopped.

use std::marker::PhantomData;

use crate::diagnostics::Diagnostics;
use crate::resources::PodSpec;
use crate::runtime::{ContainerId, FullRuntime};

use super::error::DeployError;
use super::pod::{PodRemoval, StopPolicy, start_pod, stop_pod};
use super::state::{Planned, Started, Stopped};

/// A redeploy of one pod, parameterized by its current state.
#[derive(Debug)]
pub struct Deployment<S> {
    pub(crate) pod: PodSpec,
    _state: PhantomData<S>,
}

impl<S> Deployment<S> {
    pub fn pod(&self) -> &PodSpec {
        &self.pod
    }
}

impl Deployment<Planned> {
    pub fn new(pod: PodSpec) -> Self {
        Deployment {
            pod,
            _state: PhantomData,
        }
    }

    /// Tear down whatever runs under this pod's names.
    ///
    /// Idempotent: stopping a pod that does not exist only records warnings.
    #[must_use = "deployment state must be used"]
    pub async fn stop<R: FullRuntime>(
        self,
        runtime: &R,
        policy: &StopPolicy,
        diag: &mut Diagnostics,
    ) -> (Deployment<Stopped>, PodRemoval) {
        let removal = stop_pod(runtime, &self.pod, policy, diag).await;
        (
            Deployment {
                pod: self.pod,
                _state: PhantomData,
            },
            removal,
        )
    }
}

impl Deployment<Stopped> {
    /// Create the pod and launch its containers.
    ///
    /// # Errors
    ///
    /// Returns `DeployError` if the pod or any container fails to launch.
    #[must_use = "deployment state must be used"]
    pub async fn start<R: FullRuntime>(
        self,
        runtime: &R,
        diag: &mut Diagnostics,
    ) -> Result<(Deployment<Started>, Vec<ContainerId>), DeployError> {
        let containers = start_pod(runtime, &self.pod, diag).await?;
        Ok((
            Deployment {
                pod: self.pod,
                _state: PhantomData,
            },
            containers,
        ))
    }
}

impl Deployment<Started> {
    /// Consume the deployment and return the pod that now runs.
    pub fn finish(self) -> PodSpec {
        self.pod
    }
}
