// ABOUTME: Vcs implementation that shells out to the git CLI.
// ABOUTME: Every command runs with an explicit working directory.

use super::{Vcs, VcsError};
use crate::process::{CommandRunner, CommandSpec};
use crate::types::Revision;
use async_trait::async_trait;
use std::path::Path;

pub struct GitCli<R> {
    runner: R,
    binary: String,
}

impl<R: CommandRunner> GitCli<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            binary: "git".to_string(),
        }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(&self.binary)
    }
}

#[async_trait]
impl<R: CommandRunner> Vcs for GitCli<R> {
    async fn clone_repo(&self, url: &str, branch: &str, dest: &Path) -> Result<(), VcsError> {
        let spec = self
            .command()
            .args(["clone", "--branch", branch, url])
            .arg(dest.to_string_lossy());
        let output = self.runner.run(&spec).await?;

        if !output.success() {
            return Err(VcsError::Clone {
                dest: dest.to_path_buf(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    async fn head_revision(&self, dir: &Path) -> Result<Revision, VcsError> {
        let spec = self.command().args(["rev-parse", "HEAD"]).current_dir(dir);
        let output = self.runner.run(&spec).await?;

        if !output.success() {
            return Err(VcsError::HeadRevision {
                dir: dir.to_path_buf(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(Revision::new(output.stdout.trim()))
    }

    async fn pull(&self, dir: &Path, branch: &str) -> Result<(), VcsError> {
        let spec = self
            .command()
            .args(["pull", "origin", branch])
            .current_dir(dir);
        let output = self.runner.run(&spec).await?;

        if !output.success() {
            return Err(VcsError::Pull {
                dir: dir.to_path_buf(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}
