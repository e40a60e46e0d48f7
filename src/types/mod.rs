// ABOUTME: Type-safe resource names and validated domain types.
// ABOUTME: Uses phantom types to prevent name confusion at compile time.

mod name;
mod revision;

pub use name::{
    ContainerMarker, ContainerName, Name, NameError, PodMarker, PodName, VolumeMarker, VolumeName,
};
pub use revision::Revision;
