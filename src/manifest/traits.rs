// ABOUTME: Capability traits over the container tooling.
// ABOUTME: ManifestStore for manifest lists, ImageOps for pulls, ContainerTooling for both.

use super::error::{ImageError, ManifestError};
use crate::types::{Arch, ImageRef};
use async_trait::async_trait;

/// Local manifest list operations: create, annotate, push, inspect, remove.
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// Check that manifest list support is present at all.
    async fn probe(&self) -> Result<(), ManifestError>;

    /// Remove a local manifest list.
    async fn remove(&self, list: &ImageRef) -> Result<(), ManifestError>;

    /// Create a manifest list from per-architecture images.
    async fn create(&self, list: &ImageRef, images: &[&ImageRef]) -> Result<(), ManifestError>;

    /// Record OS and architecture for one entry of a manifest list.
    async fn annotate(
        &self,
        list: &ImageRef,
        image: &ImageRef,
        arch: Arch,
    ) -> Result<(), ManifestError>;

    /// Push a manifest list to its registry.
    async fn push(&self, list: &ImageRef) -> Result<(), ManifestError>;

    /// Verbose, human-readable description of a pushed manifest list.
    async fn inspect(&self, list: &ImageRef) -> Result<String, ManifestError>;
}

/// Image operations.
#[async_trait]
pub trait ImageOps: Send + Sync {
    /// Pull an image into the local store.
    async fn pull(&self, image: &ImageRef) -> Result<(), ImageError>;
}

/// Everything the publisher needs from the container tooling.
///
/// Automatically implemented for any type providing both capabilities.
pub trait ContainerTooling: ManifestStore + ImageOps {}

impl<T: ManifestStore + ImageOps> ContainerTooling for T {}
