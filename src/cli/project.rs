use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{LedgerError, Result};
use crate::fmt::{money, signed_money};
use crate::kpi::{compute_kpis, monthly_summaries};
use crate::parser::parse_ledger_file;
use crate::projection::{project, project_from_today, Baseline, ProjectionResult, SimulationChange};
use crate::settings::load_settings;

pub struct ProjectArgs {
    pub baseline: Baseline,
    pub from_ledger: Option<String>,
    pub changes: Option<String>,
    pub months: Option<u32>,
    pub start: Option<String>,
    pub json: bool,
}

fn load_changes(path: Option<&str>) -> Result<Vec<SimulationChange>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Baseline from the latest month present in a ledger, with closing cash.
fn baseline_from_ledger(file: &str) -> Result<Baseline> {
    let ledger = parse_ledger_file(&PathBuf::from(file))?;
    let latest = monthly_summaries(&ledger.transactions)
        .pop()
        .ok_or(LedgerError::EmptyResult)?;
    let cash = compute_kpis(&ledger.transactions).cash_end;
    tracing::info!(year = latest.year, month = latest.month, "baseline taken from ledger");
    Ok(Baseline::from_summary(&latest, cash))
}

pub fn run(args: ProjectArgs) -> Result<()> {
    let settings = load_settings();
    let cur = settings.currency.as_str();
    let baseline = match &args.from_ledger {
        Some(file) => baseline_from_ledger(file)?,
        None => args.baseline,
    };
    let changes = load_changes(args.changes.as_deref())?;
    let horizon = args.months.unwrap_or(settings.default_horizon_months);

    let result = match &args.start {
        Some(month) => project(&baseline, &changes, horizon, super::parse_month(month)?),
        None => project_from_today(&baseline, &changes, horizon),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    print_projection(&result, cur);
    Ok(())
}

fn colored_diff(val: f64, cur: &str) -> String {
    let s = signed_money(val, cur);
    if val > 0.0 {
        s.green().to_string()
    } else if val < 0.0 {
        s.red().to_string()
    } else {
        s
    }
}

fn print_projection(result: &ProjectionResult, cur: &str) {
    let mut table = Table::new();
    table.set_header(vec![
        "Month",
        "Revenue",
        "Expenses",
        "Profit",
        "Profit Δ",
        "Cash",
        "Cash Δ",
    ]);
    for p in &result.projections {
        table.add_row(vec![
            Cell::new(&p.month_label),
            Cell::new(money(p.simulated_revenue, cur)),
            Cell::new(money(p.simulated_expenses, cur)),
            Cell::new(money(p.simulated_profit, cur)),
            Cell::new(colored_diff(p.profit_difference, cur)),
            Cell::new(money(p.simulated_cash, cur)),
            Cell::new(colored_diff(p.cash_difference, cur)),
        ]);
    }
    println!("Projection ({} months)\n{table}", result.projections.len());

    let s = &result.summary;
    println!("\nRevenue difference:  {}", colored_diff(s.total_revenue_difference, cur));
    println!("Expenses difference: {}", colored_diff(s.total_expenses_difference, cur));
    println!("Profit difference:   {}", colored_diff(s.total_profit_difference, cur));
    println!("Final cash difference: {}", colored_diff(s.final_cash_difference, cur));
    match s.break_even_month.and_then(|i| result.projections.get(i as usize)) {
        Some(p) => println!("Break-even: {} (month {})", p.month_label.bold(), s.break_even_month.unwrap_or(0)),
        None => println!("Break-even: none within horizon"),
    }
}
