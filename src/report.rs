use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::kpi::{compute_kpis, monthly_summaries};
use crate::models::{KpiData, MonthlySummary, Transaction};
use crate::parser::{parse_ledger_with_stats, SkipStats};

/// Everything derived from one uploaded huvudbok, in the shape handed to
/// report storage. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerReport {
    #[serde(default)]
    pub source: Option<String>,
    /// SHA-256 of the uploaded text, for duplicate-upload detection.
    pub checksum: String,
    pub transactions: Vec<Transaction>,
    pub kpis: KpiData,
    pub monthly_summaries: Vec<MonthlySummary>,
}

pub fn checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Parse and aggregate in one step. Fails as a whole if the parse fails.
pub fn build_report(text: &str, source: Option<&str>) -> Result<(LedgerReport, SkipStats)> {
    let ledger = parse_ledger_with_stats(text)?;
    let kpis = compute_kpis(&ledger.transactions);
    let monthly = monthly_summaries(&ledger.transactions);
    let report = LedgerReport {
        source: source.map(str::to_string),
        checksum: checksum(text),
        transactions: ledger.transactions,
        kpis,
        monthly_summaries: monthly,
    };
    Ok((report, ledger.skipped))
}

pub fn write_report(report: &LedgerReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

pub fn read_report(path: &Path) -> Result<LedgerReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
