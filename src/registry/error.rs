// ABOUTME: Error types for registry API calls.
// ABOUTME: Distinguishes transport failures, auth rejections and refused deletions.

/// Errors from registry HTTP operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("registry rejected credentials for {url} (status {status})")]
    Unauthorized { url: String, status: u16 },

    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("no Docker-Content-Digest header in response from {0}")]
    MissingDigest(String),

    #[error("registry does not allow manifest deletion: {0}")]
    DeletionUnsupported(String),

    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

impl RegistryError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(url: &str, status: u16) -> Self {
        match status {
            401 | 403 => RegistryError::Unauthorized {
                url: url.to_string(),
                status,
            },
            404 => RegistryError::NotFound(url.to_string()),
            405 => RegistryError::DeletionUnsupported(url.to_string()),
            _ => RegistryError::UnexpectedStatus {
                url: url.to_string(),
                status,
            },
        }
    }

    /// The registry answered, but there is no manifest digest to act on.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound(_) | RegistryError::MissingDigest(_)
        )
    }
}
