// ABOUTME: Container runtime capabilities and the podman implementation.
// ABOUTME: The deploy layer depends only on the traits re-exported here.

mod error;
pub mod podman;
pub mod traits;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use podman::PodmanCli;
pub use traits::{ContainerId, ContainerOps, FullRuntime, PodOps, RunConfig, VolumeOps};
