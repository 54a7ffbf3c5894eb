// ABOUTME: Manifest list and image operations delegated to a container CLI.
// ABOUTME: Exposes capability traits, the CLI implementation and its errors.

mod cli;
mod command;
mod error;
mod traits;

pub use cli::ContainerCli;
pub use command::CommandError;
pub use error::{ImageError, ManifestError};
pub use traits::{ContainerTooling, ImageOps, ManifestStore};

/// Printed when the container CLI has no usable `manifest` subcommand.
pub const MANIFEST_GUIDANCE: &str = "\
The container CLI must provide the `manifest` subcommand.
  - Docker: use Docker 20.10 or newer, or set \"experimental\": \"enabled\" in ~/.docker/config.json
  - Another CLI: point --cli (or CONTAINER_CLI) at a Docker-compatible binary";
