// ABOUTME: Image prefix normalization and registry coordinate derivation.
// ABOUTME: Splits a prefix like registry.example.com/proj/ into host and path.

use super::component::ComponentName;
use std::fmt;

/// Image prefix that is either empty or ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImagePrefix(String);

impl ImagePrefix {
    /// Normalize a raw prefix: append `/` unless empty or already terminated.
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() || raw.ends_with('/') {
            Self(raw.to_string())
        } else {
            Self(format!("{}/", raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into registry host and repository path at the first `/`.
    ///
    /// No attempt is made to tell a registry host from an organisation name:
    /// `library/` yields host `library` and an empty path.
    pub fn registry_coordinates(&self) -> Option<RegistryCoordinates> {
        let (host, rest) = self.0.split_once('/')?;
        let path = rest.strip_suffix('/').unwrap_or(rest);
        Some(RegistryCoordinates {
            host: host.to_string(),
            path: path.to_string(),
        })
    }
}

impl fmt::Display for ImagePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry host and repository path derived from an image prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCoordinates {
    host: String,
    path: String,
}

impl RegistryCoordinates {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Repository holding the manifest that remote cleanup deletes:
    /// `{path}/{component}-{version}`.
    ///
    /// This is not the repository images are pulled from (`{path}/{component}`).
    pub fn deletion_repository(&self, component: &ComponentName, version: &str) -> RemoteRepository {
        let segment = format!("{}-{}", component, version);
        let name = if self.path.is_empty() {
            segment
        } else {
            format!("{}/{}", self.path, segment)
        };
        RemoteRepository {
            host: self.host.clone(),
            name,
        }
    }
}

/// A repository on a specific registry host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepository {
    host: String,
    name: String,
}

impl RemoteRepository {
    pub fn new(host: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            name: name.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RemoteRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host, self.name)
    }
}
