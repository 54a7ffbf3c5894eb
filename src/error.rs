// ABOUTME: Application-wide error types for multiarch-push.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::manifest::MANIFEST_GUIDANCE;
use crate::publish::{PublishError, PublishErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl Error {
    /// Extra guidance to print after the error message.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Publish(e) if e.kind() == PublishErrorKind::CapabilityMissing => {
                Some(MANIFEST_GUIDANCE)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
