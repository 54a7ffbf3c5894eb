// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Positional version and image prefix plus component and tooling options.

use clap::Parser;
use multiarch_push::config::{DEFAULT_CLI, DEFAULT_VERSION};
use multiarch_push::output::OutputMode;

#[derive(Parser)]
#[command(name = "multiarch-push")]
#[command(about = "Assemble and push amd64/arm64 manifest lists from per-architecture images")]
#[command(
    after_help = "Environment:\n  DELETE_REMOTE      delete the previous manifest on the registry first (default false)\n  REG_USER/REG_PASS  registry credentials, both required for remote deletion\n  INSECURE_REGISTRY  skip TLS verification for registry API calls (default false)"
)]
#[command(version)]
pub struct Cli {
    /// Version tag of the per-architecture images
    #[arg(value_name = "VERSION", default_value = DEFAULT_VERSION)]
    pub image_version: String,

    /// Image prefix, e.g. registry.example.com/proj
    #[arg(value_name = "IMAGE_PREFIX")]
    pub prefix: Option<String>,

    /// Component to publish (repeatable; replaces the built-in list)
    #[arg(short = 'c', long = "component", value_name = "NAME")]
    pub components: Vec<String>,

    /// Container CLI providing `manifest` and `pull`
    #[arg(long, env = "CONTAINER_CLI", default_value = DEFAULT_CLI)]
    pub cli: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
