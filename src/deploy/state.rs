// ABOUTME: Deployment state marker types for the type state pattern.
// ABOUTME: Zero-sized types enforce stop-before-start at compile time.

/// Pod spec built, nothing touched yet.
/// Available actions: `stop()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Planned;

/// Previous instance stopped and its pod removed (or abandoned).
/// Available actions: `start()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopped;

/// Pod created and every container launched.
/// Available actions: `finish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Started;
