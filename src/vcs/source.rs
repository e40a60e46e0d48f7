// ABOUTME: Identity of the tracked repository for one run.
// ABOUTME: Injects git credentials into the clone URL and keeps them out of logs.

use crate::config::{ConfigError, RepoConfig};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the tracked repository comes from and where it lives locally.
#[derive(Clone)]
pub struct RepositorySource {
    clone_url: String,
    display_url: String,
    branch: String,
    checkout_dir: PathBuf,
    mount_dir: String,
    cfg_file: PathBuf,
}

impl RepositorySource {
    pub fn new(
        url: impl Into<String>,
        branch: impl Into<String>,
        checkout_dir: impl Into<PathBuf>,
        mount_dir: impl Into<String>,
        cfg_file: impl Into<PathBuf>,
    ) -> Self {
        let url = url.into();
        Self {
            display_url: url.clone(),
            clone_url: url,
            branch: branch.into(),
            checkout_dir: checkout_dir.into(),
            mount_dir: mount_dir.into(),
            cfg_file: cfg_file.into(),
        }
    }

    /// Build from the `repo` config section. `checkout_dir` is the already
    /// resolved local path.
    pub fn from_config(repo: &RepoConfig, checkout_dir: PathBuf) -> Result<Self, ConfigError> {
        let mut source = Self::new(
            repo.url.clone(),
            repo.branch.clone(),
            checkout_dir,
            repo.mount_dir.clone(),
            repo.cfg_file.clone(),
        );

        if let Some(auth) = repo.git_auth.as_ref().filter(|a| a.require_auth) {
            let username = auth
                .username
                .as_ref()
                .ok_or(ConfigError::MissingCredential("git_auth.username"))?
                .resolve()?;
            let token = auth
                .access_token
                .as_ref()
                .ok_or(ConfigError::MissingCredential("git_auth.access_token"))?
                .resolve()?;

            let (scheme, rest) = split_scheme(&repo.url)?;
            source.clone_url = format!(
                "{scheme}://{}:{}@{rest}",
                urlencoding::encode(&username),
                urlencoding::encode(&token)
            );
            source.display_url = format!("{scheme}://{}:***@{rest}", urlencoding::encode(&username));
        }

        Ok(source)
    }

    /// URL handed to `git clone`, credentials included.
    pub fn clone_url(&self) -> &str {
        &self.clone_url
    }

    /// URL safe to print.
    pub fn display_url(&self) -> &str {
        &self.display_url
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn checkout_dir(&self) -> &Path {
        &self.checkout_dir
    }

    pub fn mount_dir(&self) -> &str {
        &self.mount_dir
    }

    pub fn app_config_path(&self) -> PathBuf {
        self.checkout_dir.join(&self.cfg_file)
    }

    /// Bind mount of the checkout onto the mount directory.
    pub fn checkout_mount(&self) -> String {
        format!("{}:{}", self.checkout_dir.display(), self.mount_dir)
    }
}

impl fmt::Debug for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositorySource")
            .field("url", &self.display_url)
            .field("branch", &self.branch)
            .field("checkout_dir", &self.checkout_dir)
            .field("mount_dir", &self.mount_dir)
            .field("cfg_file", &self.cfg_file)
            .finish()
    }
}

fn split_scheme(url: &str) -> Result<(&str, &str), ConfigError> {
    url.split_once("://")
        .filter(|(scheme, _)| !scheme.is_empty())
        .ok_or_else(|| ConfigError::UrlWithoutScheme(url.to_string()))
}
