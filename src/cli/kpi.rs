use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::kpi::{compute_kpis, monthly_summaries};
use crate::parser::parse_ledger_file;
use crate::settings::load_settings;

pub fn run(file: &str, months: bool, verbose: bool) -> Result<()> {
    let settings = load_settings();
    let cur = settings.currency.as_str();
    let ledger = parse_ledger_file(&PathBuf::from(file))?;
    let kpis = compute_kpis(&ledger.transactions);

    let mut table = Table::new();
    table.set_header(vec!["KPI", "Amount"]);
    table.add_row(vec![Cell::new("Revenue"), Cell::new(money(kpis.revenue, cur))]);
    table.add_row(vec![Cell::new("Expenses"), Cell::new(money(kpis.expenses, cur))]);
    let net = if kpis.net_profit >= 0.0 {
        money(kpis.net_profit, cur).green().to_string()
    } else {
        money(kpis.net_profit, cur).red().to_string()
    };
    table.add_row(vec![Cell::new("Net profit".bold()), Cell::new(net)]);
    table.add_row(vec![Cell::new("Cash"), Cell::new(money(kpis.cash_end, cur))]);
    table.add_row(vec![
        Cell::new("Accounts receivable"),
        Cell::new(money(kpis.accounts_receivable, cur)),
    ]);
    table.add_row(vec![
        Cell::new("Accounts payable"),
        Cell::new(money(kpis.accounts_payable, cur)),
    ]);
    println!("Key figures\n{table}");

    if months {
        let mut mtable = Table::new();
        mtable.set_header(vec!["Month", "Revenue", "Expenses", "Profit"]);
        for m in monthly_summaries(&ledger.transactions) {
            let profit = if m.profit >= 0.0 {
                money(m.profit, cur).green().to_string()
            } else {
                money(m.profit, cur).red().to_string()
            };
            mtable.add_row(vec![
                Cell::new(format!("{:04}-{:02}", m.year, m.month)),
                Cell::new(money(m.revenue, cur)),
                Cell::new(money(m.expenses, cur)),
                Cell::new(profit),
            ]);
        }
        println!("\nMonthly summary\n{mtable}");
    }

    if verbose {
        super::parse::print_skips(&ledger.skipped);
    }
    Ok(())
}
