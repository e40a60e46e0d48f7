// ABOUTME: The `repo` section of the process configuration.
// ABOUTME: Tracked repository location, branch, mount point, and git credentials.

use super::secret::SecretValue;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct RepoConfig {
    /// Local checkout directory, relative to the config file when not absolute.
    pub dir: PathBuf,

    pub url: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Where the checkout is mounted inside the primary container.
    pub mount_dir: String,

    /// App config path, relative to the checkout.
    pub cfg_file: PathBuf,

    #[serde(default)]
    pub git_auth: Option<GitAuth>,
}

fn default_branch() -> String {
    "main".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitAuth {
    #[serde(default)]
    pub require_auth: bool,

    #[serde(default)]
    pub username: Option<SecretValue>,

    #[serde(default)]
    pub access_token: Option<SecretValue>,
}
