// ABOUTME: Registry capability trait used for remote manifest cleanup.
// ABOUTME: Resolve a tag to its digest, delete a manifest by digest.

use super::error::RegistryError;
use crate::config::RegistryCredentials;
use crate::types::{Digest, RemoteRepository};
use async_trait::async_trait;

/// Media type requested when resolving a tag to a digest.
pub const MANIFEST_LIST_MEDIA_TYPE: &str =
    "application/vnd.docker.distribution.manifest.list.v2+json";

/// Header carrying the content digest of a manifest.
pub const DIGEST_HEADER: &str = "docker-content-digest";

#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Resolve `tag` in `repository` to the digest of its manifest.
    async fn manifest_digest(
        &self,
        repository: &RemoteRepository,
        tag: &str,
        auth: &RegistryCredentials,
    ) -> Result<Digest, RegistryError>;

    /// Delete the manifest identified by `digest`.
    async fn delete_manifest(
        &self,
        repository: &RemoteRepository,
        digest: &Digest,
        auth: &RegistryCredentials,
    ) -> Result<(), RegistryError>;
}
