// ABOUTME: Multi-architecture manifest publishing pipeline.
// ABOUTME: Exports the Publisher, per-step policy, remote cleanup and errors.

mod error;
mod policy;
mod publisher;
mod remote;

pub use error::{PublishError, PublishErrorKind, StepFailure};
pub use policy::{Step, StepPolicy};
pub use publisher::{PublishReport, Publisher};
pub use remote::{RemoteOutcome, delete_remote_manifest};
