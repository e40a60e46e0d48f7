// ABOUTME: Change detection for the tracked repository.
// ABOUTME: Clones on first run, otherwise pulls and reports HEAD before and after.

use super::{RepositorySource, Vcs, VcsError};
use crate::types::Revision;

/// Revisions observed around one sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub previous: Revision,
    pub current: Revision,
}

impl SyncOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Brings the local checkout up to date and reports whether it moved.
pub struct VersionTracker<V> {
    vcs: V,
}

impl<V: Vcs> VersionTracker<V> {
    pub fn new(vcs: V) -> Self {
        Self { vcs }
    }

    /// Clone or pull the tracked branch.
    ///
    /// A fresh clone reports two distinct sentinel revisions so the first run
    /// always deploys. Failures are returned as-is and never retried: a
    /// half-updated checkout must not be deployed.
    pub async fn sync(&self, source: &RepositorySource) -> Result<SyncOutcome, VcsError> {
        let dir = source.checkout_dir();

        if !dir.exists() {
            tracing::info!(
                "cloning {} ({}) into {}",
                source.display_url(),
                source.branch(),
                dir.display()
            );
            self.vcs
                .clone_repo(source.clone_url(), source.branch(), dir)
                .await?;
            let (previous, current) = Revision::initial_pair();
            return Ok(SyncOutcome { previous, current });
        }

        let previous = self.vcs.head_revision(dir).await?;
        tracing::info!("pulling {} at {}", source.branch(), previous);
        self.vcs.pull(dir, source.branch()).await?;
        let current = self.vcs.head_revision(dir).await?;

        tracing::info!("revision {} -> {}", previous, current);
        Ok(SyncOutcome { previous, current })
    }
}
