//! # hardwareid CLI entry point
//!
//! Parses arguments, sets up logging on stderr, prints the identifier on
//! stdout. Exits 0 on success, 1 with an error message on failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hwid_cli::config::CliConfig;
use hwid_cli::identify::{run_identify, IdentifyArgs, IdentifySettings};

/// Prints the hardware ID of this host, or an application-scoped protected ID.
///
/// The raw ID is the first network interface hardware address (or, with
/// `--strategy composite` on Windows, a hash of BIOS, disk and CPU serials).
/// With `--appid`, prints HMAC-SHA256 of the application ID keyed by the raw ID.
#[derive(Parser, Debug)]
#[command(name = "hardwareid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML file with defaults for `app_id`, `strategy`, `strict`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    identify: IdentifyArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let settings = IdentifySettings::resolve(&cli.identify, &config);
    tracing::debug!(
        strategy = %settings.strategy,
        protected = settings.app_id.is_some(),
        "resolved settings"
    );
    run_identify(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwid_core::Strategy;

    #[test]
    fn cli_parse_no_flags() {
        let cli = Cli::try_parse_from(["hardwareid"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(cli.identify.app_id.is_none());
        assert!(cli.identify.strategy.is_none());
        assert!(!cli.identify.strict);
        assert!(!cli.identify.json);
    }

    #[test]
    fn cli_parse_appid() {
        let cli = Cli::try_parse_from(["hardwareid", "--appid", "Corp.SomeApp"]).unwrap();
        assert_eq!(cli.identify.app_id.as_deref(), Some("Corp.SomeApp"));
    }

    #[test]
    fn cli_parse_empty_appid() {
        let cli = Cli::try_parse_from(["hardwareid", "--appid", ""]).unwrap();
        assert_eq!(cli.identify.app_id.as_deref(), Some(""));
    }

    #[test]
    fn cli_parse_strategy() {
        let cli = Cli::try_parse_from(["hardwareid", "--strategy", "composite"]).unwrap();
        assert_eq!(cli.identify.strategy, Some(Strategy::Composite));
    }

    #[test]
    fn cli_parse_rejects_unknown_strategy() {
        assert!(Cli::try_parse_from(["hardwareid", "--strategy", "tpm"]).is_err());
    }

    #[test]
    fn cli_parse_flags_combined() {
        let cli = Cli::try_parse_from([
            "hardwareid",
            "-vv",
            "--strict",
            "--json",
            "--config",
            "hardwareid.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.identify.strict);
        assert!(cli.identify.json);
        assert_eq!(cli.config, Some(PathBuf::from("hardwareid.yaml")));
    }

    #[test]
    fn cli_parse_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["hardwareid", "extra"]).is_err());
    }

    #[test]
    fn run_reports_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "hardwareid".to_string(),
            "--config".to_string(),
            dir.path().join("missing.yaml").display().to_string(),
        ])
        .unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }

    #[cfg(not(windows))]
    #[test]
    fn run_composite_fails_off_windows() {
        let cli = Cli::try_parse_from(["hardwareid", "--strategy", "composite"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("not supported"));
    }
}
