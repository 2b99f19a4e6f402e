use std::path::PathBuf;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::parser::{parse_ledger_file, SkipStats};
use crate::settings::load_settings;

pub(crate) fn print_skips(skipped: &SkipStats) {
    if skipped.total() == 0 {
        return;
    }
    println!(
        "Skipped {} rows: {} separators, {} summaries, {} before first account, {} without date, {} bad dates, {} unreadable",
        skipped.total(),
        skipped.separators,
        skipped.summaries,
        skipped.without_account,
        skipped.without_date,
        skipped.bad_dates,
        skipped.unreadable,
    );
}

pub fn run(file: &str, limit: Option<usize>, verbose: bool) -> Result<()> {
    let settings = load_settings();
    let ledger = parse_ledger_file(&PathBuf::from(file))?;

    let mut table = Table::new();
    table.set_header(vec!["Konto", "Namn", "Datum", "Text", "Debet", "Kredit", "Saldo"]);
    let shown = limit.unwrap_or(ledger.transactions.len());
    for t in ledger.transactions.iter().take(shown) {
        table.add_row(vec![
            Cell::new(&t.account_number),
            Cell::new(&t.account_name),
            Cell::new(t.date.format("%Y-%m-%d")),
            Cell::new(&t.text),
            Cell::new(money(t.debit, &settings.currency)),
            Cell::new(money(t.credit, &settings.currency)),
            Cell::new(
                t.balance_after
                    .map(|b| money(b, &settings.currency))
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("Transactions ({})\n{table}", ledger.transactions.len());
    if verbose {
        print_skips(&ledger.skipped);
    }
    Ok(())
}
