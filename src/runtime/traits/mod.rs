// ABOUTME: Composable capability traits for container runtimes.
// ABOUTME: Defines ContainerOps, VolumeOps, PodOps, and the FullRuntime bundle.

mod container;
mod pod;
mod shared_types;
mod volume;

pub use container::ContainerOps;
pub use pod::PodOps;
pub use shared_types::*;
pub use volume::VolumeOps;

/// Everything the deploy orchestration needs from a runtime.
pub trait FullRuntime: ContainerOps + VolumeOps + PodOps {}

impl<T: ContainerOps + VolumeOps + PodOps> FullRuntime for T {}
