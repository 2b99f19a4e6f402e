pub mod config;
pub mod export;
pub mod kpi;
pub mod parse;
pub mod project;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{LedgerError, Result};

/// `YYYY-MM` to the first day of that month.
pub(crate) fn parse_month(month: &str) -> Result<NaiveDate> {
    let parsed = month
        .split_once('-')
        .and_then(|(y, m)| Some((y.trim().parse::<i32>().ok()?, m.trim().parse::<u32>().ok()?)))
        .and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1));
    parsed.ok_or_else(|| LedgerError::Other(format!("Invalid month '{month}', expected YYYY-MM")))
}

#[derive(Parser)]
#[command(name = "huvudbok", about = "Swedish general-ledger reports and what-if projections.")]
pub struct Cli {
    /// Log parser and projection details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the transactions parsed from a huvudbok CSV export.
    Parse {
        /// Path to the huvudbok CSV file
        file: String,
        /// Only show the first N transactions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show KPIs for a huvudbok CSV export.
    Kpi {
        /// Path to the huvudbok CSV file
        file: String,
        /// Also show the per-month breakdown
        #[arg(long)]
        months: bool,
    },
    /// Write the parsed transactions, KPIs and monthly summaries as JSON.
    Export {
        /// Path to the huvudbok CSV file
        file: String,
        /// Output path (default: stdout)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Project a baseline month forward with what-if changes.
    Project {
        /// Monthly revenue
        #[arg(long, default_value = "0")]
        revenue: f64,
        /// Monthly fixed costs
        #[arg(long = "fixed-costs", default_value = "0")]
        fixed_costs: f64,
        /// Monthly variable costs
        #[arg(long = "variable-costs", default_value = "0")]
        variable_costs: f64,
        /// Cash balance at the start
        #[arg(long, default_value = "0")]
        cash: f64,
        /// Take the baseline from the latest month of a huvudbok CSV instead
        #[arg(long = "from-ledger", conflicts_with_all = ["revenue", "fixed_costs", "variable_costs", "cash"])]
        from_ledger: Option<String>,
        /// JSON file with a list of changes
        #[arg(long)]
        changes: Option<String>,
        /// Number of months to project (default from settings)
        #[arg(long)]
        months: Option<u32>,
        /// First projected month: YYYY-MM (default: current month)
        #[arg(long)]
        start: Option<String>,
        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or update settings.
    Config {
        /// Default projection horizon in months
        #[arg(long)]
        horizon: Option<u32>,
        /// Currency label used when printing amounts
        #[arg(long)]
        currency: Option<String>,
    },
}
