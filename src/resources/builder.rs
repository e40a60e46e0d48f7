// ABOUTME: Builds a validated PodSpec from the app config in the checkout.
// ABOUTME: Applies defaults and injects the checkout bind mount into the primary.

use super::{ContainerSpec, PodSpec};
use crate::config::{AppConfig, ConfigError, ContainerEntry, Result};
use crate::types::{ContainerName, Name, PodName, VolumeName};
use crate::vcs::RepositorySource;
use std::collections::HashSet;

/// Image used when a container does not name one.
pub const DEFAULT_IMAGE: &str = "docker.io/library/ubuntu:latest";

/// Read the app config from the checkout and build the pod spec.
pub fn load(source: &RepositorySource) -> Result<PodSpec> {
    let path = source.app_config_path();
    tracing::debug!("reading app config {}", path.display());
    let app = AppConfig::load(&path)?;
    build(source, &app)
}

/// Build the pod spec for `app`.
///
/// The primary container always mounts the checkout at the configured mount
/// directory and works from there, whatever its own config says.
pub fn build(source: &RepositorySource, app: &AppConfig) -> Result<PodSpec> {
    let pod_name: PodName = parse_name(required(app.name.as_deref(), "name")?, "name")?;
    let primary_entry = app
        .app
        .as_ref()
        .ok_or_else(|| ConfigError::MissingField("app".to_string()))?;

    let mut primary = container(primary_entry, "app")?;
    let mount = source.checkout_mount();
    primary.volumes.retain(|v| *v != mount);
    primary.volumes.push(mount);
    primary.workdir = Some(source.mount_dir().to_string());

    let services = app
        .services
        .iter()
        .enumerate()
        .map(|(i, entry)| container(entry, &format!("services[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for spec in std::iter::once(&primary).chain(&services) {
        if !seen.insert(spec.name.as_str()) {
            return Err(ConfigError::DuplicateContainer(spec.name.to_string()));
        }
    }

    let volumes = volume_names(&app.volumes, "volumes")?;

    Ok(PodSpec {
        name: pod_name,
        primary,
        services,
        volumes,
    })
}

fn container(entry: &ContainerEntry, field: &str) -> Result<ContainerSpec> {
    let name_field = format!("{field}.name");
    let name: ContainerName = parse_name(required(entry.name.as_deref(), &name_field)?, &name_field)?;

    Ok(ContainerSpec {
        name,
        image: entry
            .image
            .clone()
            .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
        command: entry.command.clone(),
        ports: entry.ports.clone(),
        volumes: entry.volumes.clone(),
        volume_names: volume_names(&entry.volume_names, &format!("{field}.volume_names"))?,
        workdir: entry.workdir.clone(),
        env: entry.env.clone(),
    })
}

fn volume_names(raw: &[String], field: &str) -> Result<Vec<VolumeName>> {
    raw.iter()
        .enumerate()
        .map(|(i, name)| parse_name(name, &format!("{field}[{i}]")))
        .collect()
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))
}

fn parse_name<T>(value: &str, field: &str) -> Result<Name<T>> {
    Name::new(value).map_err(|source| ConfigError::InvalidName {
        field: field.to_string(),
        source,
    })
}
