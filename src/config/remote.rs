// ABOUTME: Settings for optional remote manifest deletion.
// ABOUTME: Opt-in flag, registry credentials and TLS verification toggle.

use super::env_value::{self, DELETE_REMOTE, INSECURE_REGISTRY, REG_PASS, REG_USER};
use std::fmt;

/// Remote deletion settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteDeletion {
    /// `DELETE_REMOTE` was set to a truthy value.
    pub enabled: bool,
    /// Present only when both `REG_USER` and `REG_PASS` are non-empty.
    pub credentials: Option<RegistryCredentials>,
    /// Skip TLS verification for registry API calls.
    pub insecure: bool,
}

impl RemoteDeletion {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = env_value::non_empty(lookup(REG_USER));
        let pass = env_value::non_empty(lookup(REG_PASS));
        let credentials = match (user, pass) {
            (Some(username), Some(password)) => Some(RegistryCredentials::new(username, password)),
            _ => None,
        };

        Self {
            enabled: env_value::is_truthy(lookup(DELETE_REMOTE).as_deref()),
            credentials,
            insecure: env_value::is_truthy(lookup(INSECURE_REGISTRY).as_deref()),
        }
    }
}

/// Basic-auth credentials for the registry API.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistryCredentials {
    username: String,
    password: String,
}

impl RegistryCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for RegistryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
