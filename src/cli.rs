// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Maps the deploy flags onto a run mode.

use clap::Parser;
use simpledeploy::config::CONFIG_FILENAME;
use simpledeploy::deploy::Mode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simpledeploy")]
#[command(about = "Redeploy a Podman pod whenever its git branch moves")]
#[command(version)]
pub struct Cli {
    /// Redeploy even if the branch did not move
    #[arg(short = 'd', long, conflicts_with = "rerun_only")]
    pub deploy_anyway: bool,

    /// Redeploy the current checkout without pulling
    #[arg(short = 'r', long)]
    pub rerun_only: bool,

    /// Process configuration file
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.rerun_only {
            Mode::RerunOnly
        } else if self.deploy_anyway {
            Mode::ForceDeploy
        } else {
            Mode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_mode() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap();
        assert_eq!(parse(&["simpledeploy"]).mode(), Mode::Normal);
        assert_eq!(parse(&["simpledeploy", "-d"]).mode(), Mode::ForceDeploy);
        assert_eq!(parse(&["simpledeploy", "--rerun-only"]).mode(), Mode::RerunOnly);
    }

    #[test]
    fn config_defaults_to_current_directory() {
        let cli = Cli::try_parse_from(["simpledeploy"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.json"));
        assert!(!cli.verbose);
    }

    #[test]
    fn deploy_anyway_conflicts_with_rerun_only() {
        assert!(Cli::try_parse_from(["simpledeploy", "-d", "-r"]).is_err());
    }
}
