// ABOUTME: Entry point for the multiarch-push CLI application.
// ABOUTME: Parses arguments, wires the container CLI and registry client, runs the publisher.

mod cli;

use clap::Parser;
use cli::Cli;
use multiarch_push::config::Settings;
use multiarch_push::error::Result;
use multiarch_push::manifest::ContainerCli;
use multiarch_push::output::Output;
use multiarch_push::publish::Publisher;
use multiarch_push::registry::HttpRegistryClient;
use multiarch_push::types::ComponentName;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output_mode());
    output.start_timer();

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        if let Some(hint) = e.hint() {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let components = cli.components.iter().map(ComponentName::new).collect();
    let settings = Settings::from_env(Some(cli.image_version), cli.prefix)
        .with_components(components)
        .with_cli(cli.cli);

    tracing::debug!("Settings: {:?}", settings);

    let tooling = ContainerCli::new(&settings.cli);
    let registry = HttpRegistryClient::from_settings(&settings.remote);

    let report = Publisher::new(&tooling, &registry, &settings, output)
        .run()
        .await?;

    for warning in &report.warnings {
        output.warning(&warning.message);
    }

    output.success(&report.summary());
    Ok(())
}
