// ABOUTME: Library root for simpledeploy - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod process;
pub mod resources;
pub mod runtime;
pub mod types;
pub mod vcs;
