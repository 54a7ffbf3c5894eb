// ABOUTME: Sequential publishing pipeline over the configured components.
// ABOUTME: Cleanup, prefetch, create, annotate, push, inspect with per-step policy.

use super::error::{CapabilityMissingSnafu, PublishError, StepFailure};
use super::policy::{Step, StepPolicy};
use super::remote::{RemoteOutcome, delete_remote_manifest};
use crate::config::Settings;
use crate::diagnostics::{Diagnostics, Warning};
use crate::manifest::ContainerTooling;
use crate::output::Output;
use crate::registry::RegistryClient;
use crate::types::{ComponentName, ComponentRefs};
use snafu::ResultExt;

/// Result of a run that reached the end of the component list.
#[derive(Debug)]
pub struct PublishReport {
    /// Manifest lists that were pushed, in order.
    pub published: Vec<ComponentRefs>,
    /// Best-effort failures collected along the way.
    pub warnings: Vec<Warning>,
}

impl PublishReport {
    pub fn summary(&self) -> String {
        format!(
            "Published {} manifest list(s) with {} warning(s)",
            self.published.len(),
            self.warnings.len()
        )
    }
}

/// Drives the container tooling and registry for every configured component.
pub struct Publisher<'a, T: ?Sized, R: ?Sized> {
    tooling: &'a T,
    registry: &'a R,
    settings: &'a Settings,
    output: &'a Output,
    diag: Diagnostics,
}

impl<'a, T, R> Publisher<'a, T, R>
where
    T: ContainerTooling + ?Sized,
    R: RegistryClient + ?Sized,
{
    pub fn new(tooling: &'a T, registry: &'a R, settings: &'a Settings, output: &'a Output) -> Self {
        Self {
            tooling,
            registry,
            settings,
            output,
            diag: Diagnostics::default(),
        }
    }

    /// Check capabilities, then publish each component in turn.
    ///
    /// Stops at the first fatal failure; components after it are not touched.
    pub async fn run(mut self) -> Result<PublishReport, PublishError> {
        self.check_capability().await?;

        let settings = self.settings;
        let mut published = Vec::with_capacity(settings.components.len());
        for component in &settings.components {
            published.push(self.publish_component(component).await?);
        }

        Ok(PublishReport {
            published,
            warnings: self.diag.into_warnings(),
        })
    }

    async fn check_capability(&self) -> Result<(), PublishError> {
        self.output.progress(&format!(
            "Checking for `{} manifest` support...",
            self.settings.cli
        ));
        self.tooling.probe().await.context(CapabilityMissingSnafu {
            cli: self.settings.cli.clone(),
        })
    }

    async fn publish_component(
        &mut self,
        component: &ComponentName,
    ) -> Result<ComponentRefs, PublishError> {
        let settings = self.settings;
        let refs = ComponentRefs::new(&settings.prefix, component, &settings.version);
        self.output.progress(&format!("==> {}", refs.target));

        self.remove_local(component, &refs).await;
        self.remove_remote(component).await;

        for (arch, image) in refs.sources() {
            self.output.progress(&format!("  → Pulling {}...", image));
            let pulled = self.tooling.pull(image).await;
            self.settle(Step::Pull(arch), component, pulled)?;
        }

        self.output.progress("  → Creating manifest list...");
        let created = self
            .tooling
            .create(&refs.target, &[&refs.amd64, &refs.arm64])
            .await;
        self.settle(Step::Create, component, created)?;

        for (arch, image) in refs.sources() {
            self.output
                .progress(&format!("  → Annotating {} as {}/{}...", image, arch.os(), arch));
            let annotated = self.tooling.annotate(&refs.target, image, arch).await;
            self.settle(Step::Annotate(arch), component, annotated)?;
        }

        self.output.progress("  → Pushing manifest list...");
        let pushed = self.tooling.push(&refs.target).await;
        self.settle(Step::Push, component, pushed)?;

        let inspected = self.tooling.inspect(&refs.target).await;
        if let Some(description) = self.settle(Step::Inspect, component, inspected)? {
            self.output.detail(&description);
        }

        self.output.progress(&format!("  ✓ Published {}", refs.target));
        Ok(refs)
    }

    async fn remove_local(&mut self, component: &ComponentName, refs: &ComponentRefs) {
        self.output
            .progress(&format!("  → Removing local manifest {}...", refs.target));
        // Usually there is nothing to remove, so a failure is not worth a warning.
        match self.tooling.remove(&refs.target).await {
            Ok(()) => self.output.progress("  ✓ Removed local manifest"),
            Err(e) => {
                tracing::debug!("{} for {}: {}", Step::RemoveLocal, component, e);
                self.output.progress("  → No local manifest removed");
            }
        }
    }

    async fn remove_remote(&mut self, component: &ComponentName) {
        let outcome = delete_remote_manifest(self.registry, self.settings, component).await;
        match outcome {
            RemoteOutcome::Disabled => {
                tracing::debug!("Remote deletion disabled for {}", component);
            }
            RemoteOutcome::NoPrefix => {
                self.output
                    .progress("  → Skipping remote deletion: no image prefix");
            }
            RemoteOutcome::MissingCredentials => {
                self.output.progress(
                    "  → Skipping remote deletion: REG_USER and REG_PASS must both be set",
                );
            }
            RemoteOutcome::DigestUnavailable { repository, error } if error.is_absent() => {
                self.output.progress(&format!(
                    "  → Skipping remote deletion: no manifest digest for {}:{}",
                    repository, self.settings.version
                ));
            }
            RemoteOutcome::DigestUnavailable { repository, error } => {
                self.output.progress(&format!(
                    "  → Skipping remote deletion: could not resolve {}:{}",
                    repository, self.settings.version
                ));
                self.diag.warn(Warning::new(
                    Step::DeleteRemote,
                    component.clone(),
                    format!("digest lookup for {} failed: {}", repository, error),
                ));
            }
            RemoteOutcome::Deleted { repository, digest } => {
                self.output
                    .progress(&format!("  ✓ Deleted remote manifest {}@{}", repository, digest));
            }
            RemoteOutcome::DeleteFailed {
                repository,
                digest,
                error,
            } => {
                self.diag.warn(Warning::new(
                    Step::DeleteRemote,
                    component.clone(),
                    format!("deleting {}@{} failed: {}", repository, digest, error),
                ));
            }
        }
    }

    /// Apply the step's policy to its result.
    ///
    /// Fatal failures become an error; best-effort failures become a warning
    /// and `Ok(None)`.
    fn settle<V, E>(
        &mut self,
        step: Step,
        component: &ComponentName,
        result: Result<V, E>,
    ) -> Result<Option<V>, PublishError>
    where
        E: Into<StepFailure>,
    {
        let failure = match result {
            Ok(value) => return Ok(Some(value)),
            Err(e) => e.into(),
        };

        match step.policy() {
            StepPolicy::Fatal => Err(PublishError::StepFailed {
                step,
                component: component.clone(),
                source: failure,
            }),
            StepPolicy::BestEffort => {
                self.diag.warn(Warning::new(
                    step,
                    component.clone(),
                    format!("{} failed for {}: {}", step, component, failure),
                ));
                Ok(None)
            }
        }
    }
}
