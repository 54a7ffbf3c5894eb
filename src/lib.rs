// ABOUTME: Library root for multiarch-push - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod manifest;
pub mod output;
pub mod publish;
pub mod registry;
pub mod types;
