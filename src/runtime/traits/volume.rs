// ABOUTME: Volume operations trait for container runtimes.
// ABOUTME: Creates runtime-managed named volumes.

use crate::runtime::RuntimeError;
use crate::types::VolumeName;
use async_trait::async_trait;

/// Named volume operations.
#[async_trait]
pub trait VolumeOps: Send + Sync {
    /// Create a named volume. Creating one that already exists is an error
    /// from the runtime; callers treat it as harmless.
    async fn create_volume(&self, name: &VolumeName) -> Result<(), RuntimeError>;
}
