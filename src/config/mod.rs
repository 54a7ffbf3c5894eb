// ABOUTME: Run settings assembled from positional arguments and the environment.
// ABOUTME: Applies defaults, normalizes the image prefix, reads remote deletion flags.

mod env_value;
mod remote;

pub use env_value::{DELETE_REMOTE, INSECURE_REGISTRY, REG_PASS, REG_USER, is_truthy};
pub use remote::{RegistryCredentials, RemoteDeletion};

use crate::types::{ComponentName, ImagePrefix};

/// Version used when none is given on the command line.
pub const DEFAULT_VERSION: &str = "v0.16.0";

/// Container CLI used when none is configured.
pub const DEFAULT_CLI: &str = "docker";

#[derive(Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub prefix: ImagePrefix,
    pub components: Vec<ComponentName>,
    /// Container CLI binary providing `manifest` and `pull`.
    pub cli: String,
    pub remote: RemoteDeletion,
}

impl Settings {
    /// Settings with remote deletion disabled.
    pub fn new(version: Option<String>, prefix: Option<String>) -> Self {
        Self {
            version: version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            prefix: ImagePrefix::new(prefix.as_deref().unwrap_or_default()),
            components: ComponentName::defaults(),
            cli: DEFAULT_CLI.to_string(),
            remote: RemoteDeletion::default(),
        }
    }

    /// Settings with remote deletion read from the process environment.
    pub fn from_env(version: Option<String>, prefix: Option<String>) -> Self {
        Self::from_env_with(version, prefix, env_value::process_env)
    }

    /// Settings with remote deletion read through `lookup`.
    pub fn from_env_with<F>(version: Option<String>, prefix: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            remote: RemoteDeletion::from_lookup(lookup),
            ..Self::new(version, prefix)
        }
    }

    /// Replace the component list. An empty list keeps the defaults.
    pub fn with_components(mut self, components: Vec<ComponentName>) -> Self {
        if !components.is_empty() {
            self.components = components;
        }
        self
    }

    pub fn with_cli(mut self, cli: impl Into<String>) -> Self {
        self.cli = cli.into();
        self
    }

    pub fn with_remote(mut self, remote: RemoteDeletion) -> Self {
        self.remote = remote;
        self
    }
}
