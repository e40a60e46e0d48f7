// ABOUTME: Podman runtime implementation using the podman CLI.
// ABOUTME: Implements the container, volume, and pod traits.

mod runtime;

pub use runtime::PodmanCli;
