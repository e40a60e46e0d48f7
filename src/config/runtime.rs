// ABOUTME: The optional `runtime` section of the process configuration.
// ABOUTME: Container CLI binary, stop grace period, and pod removal retry policy.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default = "default_binary")]
    pub binary: String,

    #[serde(default = "default_stop_timeout", with = "humantime_serde")]
    pub stop_timeout: Duration,

    #[serde(default = "default_pod_remove_timeout", with = "humantime_serde")]
    pub pod_remove_timeout: Duration,

    #[serde(default = "default_pod_remove_attempts")]
    pub pod_remove_attempts: u32,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            stop_timeout: default_stop_timeout(),
            pod_remove_timeout: default_pod_remove_timeout(),
            pod_remove_attempts: default_pod_remove_attempts(),
        }
    }
}

fn default_binary() -> String {
    "podman".to_string()
}

fn default_stop_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_pod_remove_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_pod_remove_attempts() -> u32 {
    3
}
