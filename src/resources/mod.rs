// ABOUTME: Typed descriptions of the pod and its containers.
// ABOUTME: Built once from the app config; consumed by the deploy orchestration.

mod builder;

pub use builder::{DEFAULT_IMAGE, build, load};

use crate::runtime::RunConfig;
use crate::types::{ContainerName, PodName, VolumeName};
use std::collections::BTreeMap;

pub const LABEL_MANAGED: &str = "simpledeploy.managed";
pub const LABEL_POD: &str = "simpledeploy.pod";
pub const LABEL_ROLE: &str = "simpledeploy.role";

/// Position of a container within its pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The application workload, started last and stopped first.
    Primary,
    /// A dependency such as a database.
    Service,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Service => "service",
        }
    }
}

/// One container of the pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: ContainerName,
    pub image: String,
    /// Shell command line, run under the container's shell.
    pub command: Option<String>,
    /// Published ports (`host:container`), registered on the pod.
    pub ports: Vec<String>,
    /// Bind mounts (`source:target`).
    pub volumes: Vec<String>,
    /// Named volumes to create before the container starts.
    pub volume_names: Vec<VolumeName>,
    pub workdir: Option<String>,
    /// Environment assignments (`KEY=VALUE`).
    pub env: Vec<String>,
}

impl ContainerSpec {
    /// Launch parameters for this container inside `pod`.
    pub fn run_config(&self, pod: &PodName, role: Role) -> RunConfig {
        let mut labels = BTreeMap::new();
        labels.insert(LABEL_MANAGED.to_string(), "true".to_string());
        labels.insert(LABEL_POD.to_string(), pod.to_string());
        labels.insert(LABEL_ROLE.to_string(), role.as_str().to_string());

        RunConfig {
            name: self.name.clone(),
            pod: pod.clone(),
            image: self.image.clone(),
            volumes: self.volumes.clone(),
            workdir: self.workdir.clone(),
            env: self.env.clone(),
            labels,
            command: self.command.clone(),
        }
    }
}

/// The whole application: one pod, its primary container, and its services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSpec {
    /// Pod name, which is also the application name.
    pub name: PodName,
    pub primary: ContainerSpec,
    /// Started in this order, before the primary.
    pub services: Vec<ContainerSpec>,
    /// Named volumes shared by the pod.
    pub volumes: Vec<VolumeName>,
}

impl PodSpec {
    /// Ports of the primary followed by each service's, in order.
    pub fn ports(&self) -> Vec<String> {
        self.containers()
            .flat_map(|(spec, _)| spec.ports.iter().cloned())
            .collect()
    }

    /// Primary first, then services in listed order.
    pub fn containers(&self) -> impl Iterator<Item = (&ContainerSpec, Role)> {
        std::iter::once((&self.primary, Role::Primary))
            .chain(self.services.iter().map(|s| (s, Role::Service)))
    }
}
