// ABOUTME: Error types for manifest and image operations.
// ABOUTME: Wraps command failures with the reference they concerned.

use super::command::CommandError;

/// Errors from manifest list operations.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest subcommand unavailable: {0}")]
    Unavailable(#[source] CommandError),

    #[error("manifest {reference}: {source}")]
    Command {
        reference: String,
        #[source]
        source: CommandError,
    },
}

impl ManifestError {
    pub fn command(reference: impl ToString, source: CommandError) -> Self {
        ManifestError::Command {
            reference: reference.to_string(),
            source,
        }
    }
}

/// Errors from image operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("pull failed for {reference}: {source}")]
    PullFailed {
        reference: String,
        #[source]
        source: CommandError,
    },
}
