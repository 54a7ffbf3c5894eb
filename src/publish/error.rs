// ABOUTME: Publishing error types with SNAFU pattern.
// ABOUTME: Fatal failures carry the step and component they stopped at.

use snafu::Snafu;

use super::policy::Step;
use crate::manifest::{ImageError, ManifestError};
use crate::registry::RegistryError;
use crate::types::ComponentName;

/// Underlying cause of a failed step.
#[derive(Debug, thiserror::Error)]
pub enum StepFailure {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Error that ends a publishing run.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PublishError {
    #[snafu(display("`{cli} manifest` is not available: {source}"))]
    CapabilityMissing { cli: String, source: ManifestError },

    #[snafu(display("{step} failed for {component}: {source}"))]
    StepFailed {
        step: Step,
        component: ComponentName,
        source: StepFailure,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishErrorKind {
    /// The container CLI has no manifest support.
    CapabilityMissing,
    /// Creating the manifest list failed.
    CreateFailed,
    /// Pushing the manifest list failed.
    PushFailed,
    /// Some other fatal step failed.
    StepFailed,
}

impl PublishError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PublishErrorKind {
        match self {
            PublishError::CapabilityMissing { .. } => PublishErrorKind::CapabilityMissing,
            PublishError::StepFailed { step, .. } => match step {
                Step::Create => PublishErrorKind::CreateFailed,
                Step::Push => PublishErrorKind::PushFailed,
                _ => PublishErrorKind::StepFailed,
            },
        }
    }

    /// Component being processed when the run stopped, if any.
    pub fn component(&self) -> Option<&ComponentName> {
        match self {
            PublishError::CapabilityMissing { .. } => None,
            PublishError::StepFailed { component, .. } => Some(component),
        }
    }
}
