//! Gatecheck - Route-keyed validation steps for API gateways
//!
//! # Usage
//!
//! ```bash
//! # Validate a historic code with the bundled rules
//! gatecheck check --route /bo-rpa/checking-account/debit/fraud \
//!     --value 20 --set fraud.historic.codes=10,20,30
//!
//! # Use a custom rule file
//! gatecheck --config configs/regenerate_reason.toml check \
//!     --route /bo-rpa/cards/regenerate \
//!     --set RegenerateCardPayload.reason=LOST \
//!     --set regenerate.reasons.values=LOST,STOLEN
//!
//! # List the configured rules
//! gatecheck rules
//! ```

mod cmd;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gatecheck_config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Rules used when no config file is given
const BUNDLED_CONFIG: &str = include_str!("../../../configs/historic.toml");

/// Gatecheck - Route-keyed validation steps for API gateways
#[derive(Parser, Debug)]
#[command(name = "gatecheck")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (defaults to the bundled historic-code rules)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the code check against a seeded request context
    Check(cmd::check::CheckArgs),

    /// List the configured rules
    Rules(cmd::rules::RulesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = config.log.directive(cli.log_level.as_deref());
    init_logging(log_level, config.log.format)?;

    match cli.command {
        Command::Check(args) => cmd::check::run(args, &config),
        Command::Rules(args) => cmd::rules::run(args, &config),
    }
}

/// Load the config file, or the bundled rules when none is given
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Config::from_str(BUNDLED_CONFIG).context("bundled config is invalid"),
    }
}

/// Initialize the tracing subscriber for logging
///
/// Logs go to stderr; stdout carries the command's JSON output.
fn init_logging(level: &str, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Console => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
