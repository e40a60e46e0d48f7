// ABOUTME: One end-to-end run: sync the repository, decide, and redeploy the pod.
// ABOUTME: Cleanup warnings are returned with the outcome instead of failing the run.

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::resources;
use crate::runtime::FullRuntime;
use crate::types::{PodName, Revision};
use crate::vcs::{RepositorySource, SyncOutcome, Vcs, VersionTracker};

use super::deployment::Deployment;
use super::pod::StopPolicy;

/// What the caller asked for on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Redeploy only when the branch moved.
    #[default]
    Normal,
    /// Sync, then redeploy even if nothing changed.
    ForceDeploy,
    /// Redeploy the current checkout without touching the repository.
    RerunOnly,
}

/// Redeploy decision for a run in `mode`, given the sync result if one happened.
pub fn should_redeploy(mode: Mode, sync: Option<&SyncOutcome>) -> bool {
    match mode {
        Mode::ForceDeploy | Mode::RerunOnly => true,
        Mode::Normal => sync.is_some_and(SyncOutcome::changed),
    }
}

/// How a successful run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The branch did not move; no container was touched.
    UpToDate { revision: Revision },
    /// The pod was stopped and started again.
    Deployed {
        pod: PodName,
        /// `None` when the repository was not synced.
        revision: Option<Revision>,
        warnings: Vec<Warning>,
    },
}

pub struct DeploymentDriver<V, R> {
    tracker: VersionTracker<V>,
    runtime: R,
    source: RepositorySource,
    policy: StopPolicy,
}

impl<V: Vcs, R: FullRuntime> DeploymentDriver<V, R> {
    pub fn new(vcs: V, runtime: R, source: RepositorySource, policy: StopPolicy) -> Self {
        Self {
            tracker: VersionTracker::new(vcs),
            runtime,
            source,
            policy,
        }
    }

    /// Run once in `mode`.
    ///
    /// # Errors
    ///
    /// Fails on repository sync errors, an unusable app config, or a pod or
    /// container that cannot be launched. The app config is read before any
    /// container is stopped.
    pub async fn run(&self, mode: Mode) -> Result<RunOutcome> {
        let revision = match mode {
            Mode::RerunOnly => {
                tracing::info!("rerun requested, skipping repository sync");
                None
            }
            Mode::Normal | Mode::ForceDeploy => {
                let sync = self.tracker.sync(&self.source).await?;
                if !should_redeploy(mode, Some(&sync)) {
                    tracing::info!("already at {}, nothing to deploy", sync.current);
                    return Ok(RunOutcome::UpToDate {
                        revision: sync.current,
                    });
                }
                Some(sync.current)
            }
        };

        let pod = resources::load(&self.source)?;
        let mut diag = Diagnostics::default();

        let (stopped, removal) = Deployment::new(pod)
            .stop(&self.runtime, &self.policy, &mut diag)
            .await;
        tracing::debug!("previous pod teardown: {:?}", removal);

        let (started, containers) = stopped.start(&self.runtime, &mut diag).await?;
        let pod = started.finish();
        tracing::info!(
            "deployed pod {} ({} containers)",
            pod.name,
            containers.len()
        );

        Ok(RunOutcome::Deployed {
            pod: pod.name,
            revision,
            warnings: diag.into_warnings(),
        })
    }
}
