// ABOUTME: Entry point for the simpledeploy CLI application.
// ABOUTME: Loads the process config, wires git and podman, and runs one deploy cycle.

mod cli;

use clap::Parser;
use cli::Cli;
use simpledeploy::config::{Config, config_dir};
use simpledeploy::deploy::{DeploymentDriver, RunOutcome, StopPolicy};
use simpledeploy::error::Result;
use simpledeploy::process::SystemRunner;
use simpledeploy::runtime::PodmanCli;
use simpledeploy::vcs::{GitCli, RepositorySource};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbose flag when set.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let base = config_dir(&cli.config)?;
    let source = RepositorySource::from_config(&config.repo, config.checkout_dir(&base))?;
    tracing::debug!("using {:?}", source);

    let driver = DeploymentDriver::new(
        GitCli::new(SystemRunner),
        PodmanCli::with_binary(SystemRunner, &config.runtime.binary),
        source,
        StopPolicy::from(&config.runtime),
    );

    match driver.run(cli.mode()).await? {
        RunOutcome::UpToDate { revision } => {
            tracing::info!("up to date at {}", revision);
        }
        RunOutcome::Deployed {
            pod,
            revision,
            warnings,
        } => {
            match revision {
                Some(revision) => tracing::info!("pod {} deployed at {}", pod, revision),
                None => tracing::info!("pod {} redeployed", pod),
            }
            if !warnings.is_empty() {
                tracing::warn!("{} cleanup warnings during this run:", warnings.len());
                for warning in &warnings {
                    tracing::warn!("  {}", warning.message);
                }
            }
        }
    }

    Ok(())
}
