// ABOUTME: Optional deletion of the previously published manifest on the registry.
// ABOUTME: Every failure degrades to a skip; nothing here can stop the run.

use crate::config::Settings;
use crate::registry::{RegistryClient, RegistryError};
use crate::types::{ComponentName, Digest, RemoteRepository};

/// What remote cleanup did for one component.
#[derive(Debug)]
pub enum RemoteOutcome {
    /// `DELETE_REMOTE` is not enabled.
    Disabled,
    /// No image prefix, so there is no registry to talk to.
    NoPrefix,
    /// `REG_USER` or `REG_PASS` is missing.
    MissingCredentials,
    /// The tag could not be resolved to a digest.
    DigestUnavailable {
        repository: RemoteRepository,
        error: RegistryError,
    },
    /// The manifest was deleted.
    Deleted {
        repository: RemoteRepository,
        digest: Digest,
    },
    /// The registry refused or failed the deletion.
    DeleteFailed {
        repository: RemoteRepository,
        digest: Digest,
        error: RegistryError,
    },
}

/// Resolve `{version}` in the component's deletion repository and delete it by digest.
pub async fn delete_remote_manifest<R>(
    registry: &R,
    settings: &Settings,
    component: &ComponentName,
) -> RemoteOutcome
where
    R: RegistryClient + ?Sized,
{
    if !settings.remote.enabled {
        return RemoteOutcome::Disabled;
    }

    let Some(coordinates) = settings.prefix.registry_coordinates() else {
        return RemoteOutcome::NoPrefix;
    };

    let Some(auth) = settings.remote.credentials.as_ref() else {
        return RemoteOutcome::MissingCredentials;
    };

    let repository = coordinates.deletion_repository(component, &settings.version);

    let digest = match registry
        .manifest_digest(&repository, &settings.version, auth)
        .await
    {
        Ok(digest) => digest,
        Err(error) => return RemoteOutcome::DigestUnavailable { repository, error },
    };

    match registry.delete_manifest(&repository, &digest, auth).await {
        Ok(()) => RemoteOutcome::Deleted { repository, digest },
        Err(error) => RemoteOutcome::DeleteFailed {
            repository,
            digest,
            error,
        },
    }
}
