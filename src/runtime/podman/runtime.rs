// ABOUTME: PodmanCli struct and trait implementations.
// ABOUTME: Drives the podman command-line client through a CommandRunner.

use crate::process::{CommandOutput, CommandRunner, CommandSpec, ProcessError};
use crate::runtime::error::{CommandFailedSnafu, RuntimeError, SpawnSnafu, TimedOutSnafu};
use crate::runtime::traits::{ContainerId, ContainerOps, PodOps, RunConfig, VolumeOps};
use crate::types::{ContainerName, PodName, VolumeName};
use async_trait::async_trait;
use snafu::ResultExt;
use std::time::Duration;

/// Shell used to run a container's configured command line.
const SHELL: &str = "bash";

/// Podman runtime backed by the `podman` binary.
pub struct PodmanCli<R> {
    runner: R,
    binary: String,
}

impl<R: CommandRunner> PodmanCli<R> {
    pub fn new(runner: R) -> Self {
        Self::with_binary(runner, "podman")
    }

    /// Use a different podman-compatible binary (e.g. a wrapper script).
    pub fn with_binary(runner: R, binary: impl Into<String>) -> Self {
        Self {
            runner,
            binary: binary.into(),
        }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.binary)
    }

    /// Run one podman command; a non-zero exit becomes an error.
    ///
    /// `operation` names the command in errors without echoing its arguments,
    /// which can carry environment values.
    async fn exec(
        &self,
        operation: String,
        spec: CommandSpec,
    ) -> Result<CommandOutput, RuntimeError> {
        match self.runner.run(&spec).await {
            Ok(output) if output.success() => Ok(output),
            Ok(output) => CommandFailedSnafu {
                operation,
                code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            }
            .fail(),
            Err(ProcessError::TimedOut(timeout)) => TimedOutSnafu { operation, timeout }.fail(),
            Err(e) => Err(e).context(SpawnSnafu { operation }),
        }
    }
}

/// Whole seconds for `podman stop -t`, rounded up so a sub-second grace
/// period never becomes an immediate kill.
fn grace_seconds(timeout: Duration) -> u64 {
    timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
}

/// Arguments for `podman run`, image and command included.
fn run_args(config: &RunConfig) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "-d".to_string(),
        "--name".to_string(),
        config.name.to_string(),
        "--pod".to_string(),
        config.pod.to_string(),
    ];

    for volume in &config.volumes {
        args.push("-v".to_string());
        args.push(volume.clone());
    }

    if let Some(ref workdir) = config.workdir {
        args.push("-w".to_string());
        args.push(workdir.clone());
    }

    for assignment in &config.env {
        args.push("-e".to_string());
        args.push(assignment.clone());
    }

    for (key, value) in &config.labels {
        args.push("--label".to_string());
        args.push(format!("{key}={value}"));
    }

    args.push(config.image.clone());

    if let Some(ref command) = config.command {
        args.push(SHELL.to_string());
        args.push("-c".to_string());
        args.push(command.clone());
    }

    args
}

#[async_trait]
impl<R: CommandRunner> ContainerOps for PodmanCli<R> {
    async fn run_container(&self, config: &RunConfig) -> Result<ContainerId, RuntimeError> {
        let spec = self.command().args(run_args(config));
        let output = self
            .exec(format!("{} run {}", self.binary, config.name), spec)
            .await?;
        Ok(ContainerId::new(output.stdout.trim()))
    }

    async fn stop_container(
        &self,
        name: &ContainerName,
        timeout: Duration,
    ) -> Result<(), RuntimeError> {
        let spec = self
            .command()
            .args(["stop", "-t", &grace_seconds(timeout).to_string(), name.as_str()]);
        self.exec(format!("{} stop {}", self.binary, name), spec)
            .await?;
        Ok(())
    }

    async fn remove_container(&self, name: &ContainerName) -> Result<(), RuntimeError> {
        let spec = self.command().args(["rm", "-f", name.as_str()]);
        self.exec(format!("{} rm {}", self.binary, name), spec)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<R: CommandRunner> VolumeOps for PodmanCli<R> {
    async fn create_volume(&self, name: &VolumeName) -> Result<(), RuntimeError> {
        let spec = self.command().args(["volume", "create", name.as_str()]);
        self.exec(format!("{} volume create {}", self.binary, name), spec)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl<R: CommandRunner> PodOps for PodmanCli<R> {
    async fn create_pod(&self, name: &PodName, ports: &[String]) -> Result<(), RuntimeError> {
        let mut spec = self.command().args(["pod", "create", "--name", name.as_str()]);
        for port in ports {
            spec = spec.args(["-p", port.as_str()]);
        }
        self.exec(format!("{} pod create {}", self.binary, name), spec)
            .await?;
        Ok(())
    }

    async fn remove_pod(&self, name: &PodName, timeout: Duration) -> Result<(), RuntimeError> {
        let spec = self
            .command()
            .args(["pod", "rm", "-f", name.as_str()])
            .timeout(timeout);
        self.exec(format!("{} pod rm {}", self.binary, name), spec)
            .await?;
        Ok(())
    }
}
