// ABOUTME: Diagnostics accumulator for best-effort cleanup failures during a deploy.
// ABOUTME: Collects warnings that must never fail a run but should be reported.

/// Collects non-fatal warnings during deployment operations.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of warnings of the given kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn volume_create(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::VolumeCreate,
            message: message.into(),
        }
    }

    pub fn container_stop(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ContainerStop,
            message: message.into(),
        }
    }

    pub fn container_remove(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ContainerRemove,
            message: message.into(),
        }
    }

    pub fn pod_remove(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::PodRemove,
            message: message.into(),
        }
    }
}

/// Categories of cleanup failures that are logged and swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Named volume could not be created (often: it already exists).
    VolumeCreate,
    /// Graceful stop failed; removal still follows.
    ContainerStop,
    /// Forced removal failed; a missing container is an acceptable end state.
    ContainerRemove,
    /// Pod removal was abandoned after the last attempt.
    PodRemove,
}
