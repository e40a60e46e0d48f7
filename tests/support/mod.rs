// ABOUTME: Test support utilities.
// ABOUTME: Recording fakes for the runtime and version control capabilities.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use simpledeploy::resources::{ContainerSpec, DEFAULT_IMAGE, PodSpec};
use simpledeploy::runtime::{ContainerId, ContainerOps, PodOps, RunConfig, RuntimeError, VolumeOps};
use simpledeploy::types::{ContainerName, PodName, Revision, VolumeName};
use simpledeploy::vcs::{Vcs, VcsError};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("simpledeploy=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn failure(operation: String, stderr: &str) -> RuntimeError {
    RuntimeError::CommandFailed {
        operation,
        code: Some(125),
        stderr: stderr.to_string(),
    }
}

#[derive(Default)]
struct RuntimeState {
    calls: Vec<String>,
    running: HashSet<String>,
    fail_launch: HashSet<String>,
    fail_pod_create: bool,
    fail_volumes: bool,
    pod_remove_failures: u32,
    pod_remove_timeouts: Vec<Duration>,
}

/// In-memory runtime that records every call as a short command line.
///
/// Stopping or removing a container that is not running fails like podman
/// does for a missing container.
#[derive(Clone, Default)]
pub struct FakeRuntime {
    state: Arc<Mutex<RuntimeState>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend these containers are left over from a previous run.
    pub fn with_running(self, names: &[&str]) -> Self {
        self.state
            .lock()
            .running
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn failing_launch(self, name: &str) -> Self {
        self.state.lock().fail_launch.insert(name.to_string());
        self
    }

    pub fn failing_pod_create(self) -> Self {
        self.state.lock().fail_pod_create = true;
        self
    }

    pub fn failing_volumes(self) -> Self {
        self.state.lock().fail_volumes = true;
        self
    }

    /// Make the first `n` pod removals time out.
    pub fn failing_pod_removal(self, n: u32) -> Self {
        self.state.lock().pod_remove_failures = n;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    pub fn pod_remove_timeouts(&self) -> Vec<Duration> {
        self.state.lock().pod_remove_timeouts.clone()
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.state.lock().running.contains(name)
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn run_container(&self, config: &RunConfig) -> Result<ContainerId, RuntimeError> {
        let mut state = self.state.lock();
        let name = config.name.to_string();
        state.calls.push(format!("run {name}"));
        if state.fail_launch.contains(&name) {
            return Err(failure(format!("podman run {name}"), "image not known"));
        }
        state.running.insert(name.clone());
        Ok(ContainerId::new(format!("{name}-0123456789abcdef")))
    }

    async fn stop_container(
        &self,
        name: &ContainerName,
        timeout: Duration,
    ) -> Result<(), RuntimeError> {
        let mut state = self.state.lock();
        state.calls.push(format!("stop {name} {}", timeout.as_secs()));
        if state.running.contains(name.as_str()) {
            Ok(())
        } else {
            Err(failure(format!("podman stop {name}"), "no such container"))
        }
    }

    async fn remove_container(&self, name: &ContainerName) -> Result<(), RuntimeError> {
        let mut state = self.state.lock();
        state.calls.push(format!("rm {name}"));
        if state.running.remove(name.as_str()) {
            Ok(())
        } else {
            Err(failure(format!("podman rm {name}"), "no such container"))
        }
    }
}

#[async_trait]
impl VolumeOps for FakeRuntime {
    async fn create_volume(&self, name: &VolumeName) -> Result<(), RuntimeError> {
        let mut state = self.state.lock();
        state.calls.push(format!("volume {name}"));
        if state.fail_volumes {
            return Err(failure(format!("podman volume create {name}"), "volume already exists"));
        }
        Ok(())
    }
}

#[async_trait]
impl PodOps for FakeRuntime {
    async fn create_pod(&self, name: &PodName, ports: &[String]) -> Result<(), RuntimeError> {
        let mut state = self.state.lock();
        state.calls.push(format!("pod create {name} [{}]", ports.join(",")));
        if state.fail_pod_create {
            return Err(failure(format!("podman pod create {name}"), "port already in use"));
        }
        Ok(())
    }

    async fn remove_pod(&self, name: &PodName, timeout: Duration) -> Result<(), RuntimeError> {
        let mut state = self.state.lock();
        state.calls.push(format!("pod rm {name}"));
        state.pod_remove_timeouts.push(timeout);
        if state.pod_remove_failures > 0 {
            state.pod_remove_failures -= 1;
            return Err(RuntimeError::TimedOut {
                operation: format!("podman pod rm {name}"),
                timeout,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct VcsState {
    calls: Vec<String>,
    heads: VecDeque<String>,
    fail_pull: bool,
}

/// Version control fake. A clone creates the destination directory and
/// writes the app config into it; heads are served from a queue.
#[derive(Clone)]
pub struct FakeVcs {
    cfg_file: PathBuf,
    app_config: String,
    state: Arc<Mutex<VcsState>>,
}

impl FakeVcs {
    pub fn new(cfg_file: impl Into<PathBuf>, app_config: impl Into<String>) -> Self {
        Self {
            cfg_file: cfg_file.into(),
            app_config: app_config.into(),
            state: Arc::default(),
        }
    }

    /// Revisions returned by successive `head_revision` calls.
    pub fn with_heads(self, heads: &[&str]) -> Self {
        self.state
            .lock()
            .heads
            .extend(heads.iter().map(|h| h.to_string()));
        self
    }

    pub fn failing_pull(self) -> Self {
        self.state.lock().fail_pull = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }
}

#[async_trait]
impl Vcs for FakeVcs {
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), VcsError> {
        self.state.lock().calls.push(format!("clone {url} {branch}"));
        std::fs::create_dir_all(dest).unwrap();
        std::fs::write(dest.join(&self.cfg_file), &self.app_config).unwrap();
        Ok(())
    }

    async fn head_revision(&self, dir: &Path) -> Result<Revision, VcsError> {
        let mut state = self.state.lock();
        state.calls.push("rev-parse".to_string());
        match state.heads.pop_front() {
            Some(head) => Ok(Revision::new(head)),
            None => Err(VcsError::HeadRevision {
                dir: dir.to_path_buf(),
                stderr: "no more heads scripted".to_string(),
            }),
        }
    }

    async fn pull(&self, dir: &Path, branch: &str) -> Result<(), VcsError> {
        let mut state = self.state.lock();
        state.calls.push(format!("pull {branch}"));
        if state.fail_pull {
            return Err(VcsError::Pull {
                dir: dir.to_path_buf(),
                stderr: "could not resolve host".to_string(),
            });
        }
        Ok(())
    }
}

pub fn container(name: &str, ports: &[&str]) -> ContainerSpec {
    ContainerSpec {
        name: ContainerName::new(name).unwrap(),
        image: DEFAULT_IMAGE.to_string(),
        command: None,
        ports: ports.iter().map(|p| p.to_string()).collect(),
        volumes: vec![],
        volume_names: vec![],
        workdir: None,
        env: vec![],
    }
}

/// Pod `shop` with primary `web` and services `db`, `cache`.
pub fn shop_pod() -> PodSpec {
    PodSpec {
        name: PodName::new("shop").unwrap(),
        primary: container("web", &["8080:80"]),
        services: vec![container("db", &["5432:5432"]), container("cache", &[])],
        volumes: vec![VolumeName::new("shared").unwrap()],
    }
}
