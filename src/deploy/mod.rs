// ABOUTME: Deployment orchestration using the type state pattern.
// ABOUTME: Exports the pod/container lifecycle steps and the run driver.

mod container;
mod deployment;
mod driver;
mod error;
mod pod;
mod state;

pub use container::{ContainerPhase, create_volumes, start_container, stop_container};
pub use deployment::Deployment;
pub use driver::{DeploymentDriver, Mode, RunOutcome, should_redeploy};
pub use error::DeployError;
pub use pod::{PodRemoval, RemovalPolicy, StopPolicy, remove_pod, start_pod, stop_pod};
pub use state::{Planned, Started, Stopped};
