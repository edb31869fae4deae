//! Rules command - List the compiled rule table
//!
//! # Usage
//!
//! ```bash
//! gatecheck rules            # one rule per line
//! gatecheck rules --json     # JSON array
//! ```

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use gatecheck_config::Config;
use gatecheck_routing::RuleTable;
use gatecheck_transform::CodeCheckStep;
use serde::Serialize;

/// Rules command arguments
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

/// One row of the listing
#[derive(Debug, Serialize, PartialEq, Eq)]
struct RuleRow<'a> {
    route: &'a str,
    codes_key: &'a str,
    error: &'a str,
    kind: &'static str,
}

/// Run the rules command
pub fn run(args: RulesArgs, config: &Config) -> Result<()> {
    let step = CodeCheckStep::from_config(config)?;
    let rows = rows(step.dispatcher().table());

    let mut stdout = io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&rows)?)?;
    } else {
        for row in &rows {
            writeln!(
                stdout,
                "{}\t{}\t{}\t{}",
                row.route, row.kind, row.codes_key, row.error
            )?;
        }
    }

    Ok(())
}

/// Rules sorted by route
fn rows(table: &RuleTable) -> Vec<RuleRow<'_>> {
    table
        .routes()
        .into_iter()
        .filter_map(|route| table.lookup(route))
        .map(|rule| RuleRow {
            route: rule.route().as_str(),
            codes_key: rule.codes_key(),
            error: rule.error_classification(),
            kind: rule.kind().as_str(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rows_sorted_by_route() {
        let config =
            Config::from_str(include_str!("../../../../configs/historic.toml")).unwrap();
        let step = CodeCheckStep::from_config(&config).unwrap();
        let rows = rows(step.dispatcher().table());

        assert_eq!(rows.len(), 6);
        let routes: Vec<&str> = rows.iter().map(|r| r.route).collect();
        let mut sorted = routes.clone();
        sorted.sort();
        assert_eq!(routes, sorted);
        assert_eq!(
            rows[0],
            RuleRow {
                route: "/bo-rpa/checking-account/credit/bill",
                codes_key: "bill.credit.historic.codes",
                error: "CREDIT_BILL_INVALID_HISTORIC",
                kind: "integer",
            }
        );
    }
}
