use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One booked row from a huvudbok export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub account_number: String,
    pub account_name: String,
    pub date: NaiveDate,
    pub text: String,
    pub info: String,
    pub debit: f64,
    pub credit: f64,
    /// `None` when the Saldo cell was blank; `Some(0.0)` is a real zero balance.
    pub balance_after: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub cash_end: f64,
    pub accounts_receivable: f64,
    pub accounts_payable: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}
