// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: RunConfig describes one container launch; ContainerId is what the runtime returns.

use crate::types::{ContainerName, PodName};
use std::collections::BTreeMap;
use std::fmt;

/// Everything needed to launch one detached container inside a pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Name for the container.
    pub name: ContainerName,
    /// Pod the container joins. Port publishing belongs to the pod.
    pub pod: PodName,
    /// Image to run.
    pub image: String,
    /// Bind mounts and named volume mounts (`source:target`).
    pub volumes: Vec<String>,
    /// Working directory.
    pub workdir: Option<String>,
    /// Environment assignments (`KEY=VALUE`).
    pub env: Vec<String>,
    /// Labels to apply.
    pub labels: BTreeMap<String, String>,
    /// Shell command line; runs under `bash -c` when set.
    pub command: Option<String>,
}

/// Identifier the runtime reports for a launched container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-character prefix the runtime shows in listings.
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
