//! Ingestion of Swedish huvudbok (general ledger) exports, KPI reports and
//! what-if projections.

pub mod cli;
pub mod error;
pub mod fmt;
pub mod kpi;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod projection;
pub mod report;
pub mod settings;

pub use error::{LedgerError, Result};
pub use kpi::{compute_kpis, monthly_summaries};
pub use models::{KpiData, MonthlySummary, Transaction};
pub use parser::{parse_ledger, parse_ledger_file, parse_ledger_reader, parse_ledger_with_stats};
pub use projection::{project, Baseline, ChangeType, ProjectionResult, SimulationChange};
