// ABOUTME: Version control capability and change detection for the tracked repository.
// ABOUTME: Exposes the Vcs trait, a git CLI implementation, and the VersionTracker.

mod git;
mod source;
mod tracker;

pub use git::GitCli;
pub use source::RepositorySource;
pub use tracker::{SyncOutcome, VersionTracker};

use crate::process::ProcessError;
use crate::types::Revision;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Version control operations the tracker needs.
#[async_trait]
pub trait Vcs: Send + Sync {
    /// Clone `url` at `branch` into `dest`.
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), VcsError>;

    /// Current HEAD revision of the checkout in `dir`.
    async fn head_revision(&self, dir: &Path) -> Result<Revision, VcsError>;

    /// Fetch and merge `branch` from the remote into the checkout in `dir`.
    async fn pull(&self, dir: &Path, branch: &str) -> Result<(), VcsError>;
}

/// Errors from version control operations. All of them abort the run.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("git clone into {dest} failed: {stderr}")]
    Clone { dest: PathBuf, stderr: String },

    #[error("git pull in {dir} failed: {stderr}")]
    Pull { dir: PathBuf, stderr: String },

    #[error("could not read HEAD in {dir}: {stderr}")]
    HeadRevision { dir: PathBuf, stderr: String },

    #[error("git command failed: {0}")]
    Process(#[from] ProcessError),
}
