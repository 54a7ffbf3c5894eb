// ABOUTME: Container CLI backed implementation of the tooling traits.
// ABOUTME: Shells out to `<cli> manifest ...` and `<cli> pull`.

use super::command::{self, CommandError};
use super::error::{ImageError, ManifestError};
use super::traits::{ImageOps, ManifestStore};
use crate::types::{Arch, ImageRef};
use async_trait::async_trait;

/// Tooling implementation that drives a Docker-compatible CLI.
#[derive(Debug, Clone)]
pub struct ContainerCli {
    program: String,
}

impl ContainerCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    async fn manifest(&self, args: &[&str]) -> Result<String, CommandError> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push("manifest");
        full.extend_from_slice(args);
        command::run(&self.program, &full).await
    }
}

#[async_trait]
impl ManifestStore for ContainerCli {
    async fn probe(&self) -> Result<(), ManifestError> {
        self.manifest(&["--help"])
            .await
            .map(|_| ())
            .map_err(ManifestError::Unavailable)
    }

    async fn remove(&self, list: &ImageRef) -> Result<(), ManifestError> {
        self.manifest(&["rm", list.as_str()])
            .await
            .map(|_| ())
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn create(&self, list: &ImageRef, images: &[&ImageRef]) -> Result<(), ManifestError> {
        let mut args = vec!["create", list.as_str()];
        args.extend(images.iter().map(|i| i.as_str()));
        self.manifest(&args)
            .await
            .map(|_| ())
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn annotate(
        &self,
        list: &ImageRef,
        image: &ImageRef,
        arch: Arch,
    ) -> Result<(), ManifestError> {
        self.manifest(&[
            "annotate",
            list.as_str(),
            image.as_str(),
            "--os",
            arch.os(),
            "--arch",
            arch.as_str(),
        ])
        .await
        .map(|_| ())
        .map_err(|e| ManifestError::command(list, e))
    }

    async fn push(&self, list: &ImageRef) -> Result<(), ManifestError> {
        self.manifest(&["push", list.as_str()])
            .await
            .map(|_| ())
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn inspect(&self, list: &ImageRef) -> Result<String, ManifestError> {
        self.manifest(&["inspect", "--verbose", list.as_str()])
            .await
            .map_err(|e| ManifestError::command(list, e))
    }
}

#[async_trait]
impl ImageOps for ContainerCli {
    async fn pull(&self, image: &ImageRef) -> Result<(), ImageError> {
        command::run(&self.program, &["pull", image.as_str()])
            .await
            .map(|_| ())
            .map_err(|source| ImageError::PullFailed {
                reference: image.to_string(),
                source,
            })
    }
}
