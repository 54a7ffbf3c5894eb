// ABOUTME: Component names that identify the images being published.
// ABOUTME: Names are taken verbatim; no validation is applied.

use std::fmt;

/// Components published when none are given on the command line.
pub const DEFAULT_COMPONENTS: &[&str] = &["node-feature-discovery"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in component list.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_COMPONENTS.iter().map(|c| Self::new(*c)).collect()
    }
}

impl From<&str> for ComponentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
