//! Check command - Run the code check step against a seeded context
//!
//! Seeds a `MemoryContext` from the command line, runs the step, and
//! prints the outcome and the resulting context as JSON.
//!
//! # Usage
//!
//! ```bash
//! gatecheck check --route /bo-rpa/checking-account/debit/fraud --value 99 \
//!     --set fraud.historic.codes=10,20,30
//! ```
//!
//! ```json
//! {
//!   "outcome": { "is_valid": false, "error_classification": "DEBIT_FRAUD_INVALID_HISTORIC", "kind": "invalid_code" },
//!   "context": { "errorType": "DEBIT_FRAUD_INVALID_HISTORIC", "fraud.historic.codes": "10,20,30", ... }
//! }
//! ```

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Args;
use gatecheck_config::Config;
use gatecheck_context::{Context, MemoryContext, Value};
use gatecheck_transform::{CodeCheckStep, ValidationOutcome};
use serde::Serialize;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Request route (written to the configured route key)
    #[arg(short, long)]
    route: Option<String>,

    /// Value to validate (written to the configured input key)
    #[arg(short, long)]
    value: Option<String>,

    /// Extra context entries as KEY=VALUE (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

/// Outcome plus the context it was written into
#[derive(Debug, Serialize)]
pub struct Report {
    outcome: ValidationOutcome,
    context: MemoryContext,
}

/// Run the check command
pub fn run(args: CheckArgs, config: &Config) -> Result<()> {
    let report = check(&args, config)?;

    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Seed the context, run the step once, and collect the report
pub fn check(args: &CheckArgs, config: &Config) -> Result<Report> {
    let mut ctx = seed_context(args, config)?;

    let step = CodeCheckStep::from_config(config)?;
    let outcome = step.check(&mut ctx)?;

    tracing::info!(
        valid = outcome.is_valid(),
        kind = %outcome.kind(),
        "check complete"
    );

    Ok(Report {
        outcome,
        context: ctx,
    })
}

fn seed_context(args: &CheckArgs, config: &Config) -> Result<MemoryContext> {
    let mut ctx = MemoryContext::new();

    for entry in &args.set {
        let (key, value) = parse_entry(entry)?;
        ctx.set(key, Value::from(value))?;
    }

    if let Some(ref route) = args.route {
        ctx.set(&config.keys.route, Value::from(route.as_str()))?;
    }
    if let Some(ref value) = args.value {
        ctx.set(&config.keys.input, Value::from(value.as_str()))?;
    }

    Ok(ctx)
}

/// Split `KEY=VALUE` at the first `=`
fn parse_entry(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((key, _)) if key.is_empty() => bail!("empty key in '{}'", entry),
        Some((key, value)) => Ok((key, value)),
        None => bail!("expected KEY=VALUE, got '{}'", entry),
    }
}
