use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;

use crate::models::{KpiData, MonthlySummary, Transaction};

// ---------------------------------------------------------------------------
// Account classification (BAS kontoplan ranges)
// ---------------------------------------------------------------------------

pub const CASH_ACCOUNTS: [&str; 5] = ["1910", "1920", "1930", "1940", "1950"];
pub const ACCOUNTS_RECEIVABLE: &str = "1510";
pub const ACCOUNTS_PAYABLE: &str = "2440";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountClass {
    Income,
    Expense,
    Cash,
    Other,
}

pub fn classify_account(account_number: &str) -> AccountClass {
    if CASH_ACCOUNTS.contains(&account_number) {
        return AccountClass::Cash;
    }
    match account_number.parse::<u32>() {
        Ok(3000..=3999) => AccountClass::Income,
        Ok(4000..=7999) => AccountClass::Expense,
        _ => AccountClass::Other,
    }
}

fn revenue_and_expenses<'a>(txns: impl Iterator<Item = &'a Transaction>) -> (f64, f64) {
    txns.fold((0.0, 0.0), |(rev, exp), t| match classify_account(&t.account_number) {
        AccountClass::Income => (rev + t.credit, exp),
        AccountClass::Expense => (rev, exp + t.debit),
        _ => (rev, exp),
    })
}

fn net_movement<'a>(txns: impl Iterator<Item = &'a Transaction>) -> f64 {
    txns.map(|t| t.debit - t.credit).sum()
}

// ---------------------------------------------------------------------------
// Balances
// ---------------------------------------------------------------------------

/// Saldo of the account's latest dated row that has one (last row wins on
/// the same date); without any Saldo, the net debit-credit movement.
pub fn closing_balance(transactions: &[Transaction], account_number: &str) -> f64 {
    let rows = move || transactions.iter().filter(move |t| t.account_number == account_number);
    rows()
        .filter_map(|t| t.balance_after.map(|b| (t.date, b)))
        .max_by_key(|(date, _)| *date)
        .map(|(_, b)| b)
        .unwrap_or_else(|| net_movement(rows()))
}

/// Closing cash across all cash accounts observed. Falls back to the
/// aggregate cash movement when the balances sum to exactly zero, which
/// covers exports that never fill in Saldo.
pub fn cash_end(transactions: &[Transaction]) -> f64 {
    let accounts: BTreeSet<&str> = transactions
        .iter()
        .filter(|t| classify_account(&t.account_number) == AccountClass::Cash)
        .map(|t| t.account_number.as_str())
        .collect();

    let total: f64 = accounts
        .iter()
        .map(|acct| {
            let closing = closing_balance(transactions, acct);
            if closing != 0.0 {
                closing
            } else {
                net_movement(transactions.iter().filter(|t| t.account_number == *acct))
            }
        })
        .sum();

    if total != 0.0 {
        return total;
    }
    net_movement(
        transactions
            .iter()
            .filter(|t| classify_account(&t.account_number) == AccountClass::Cash),
    )
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

pub fn compute_kpis(transactions: &[Transaction]) -> KpiData {
    let (revenue, expenses) = revenue_and_expenses(transactions.iter());

    KpiData {
        revenue,
        expenses,
        net_profit: revenue - expenses,
        cash_end: cash_end(transactions),
        accounts_receivable: closing_balance(transactions, ACCOUNTS_RECEIVABLE),
        accounts_payable: closing_balance(transactions, ACCOUNTS_PAYABLE),
    }
}

pub fn monthly_summaries(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut by_month: BTreeMap<(i32, u32), Vec<&Transaction>> = BTreeMap::new();
    for t in transactions {
        by_month.entry((t.date.year(), t.date.month())).or_default().push(t);
    }
    by_month
        .into_iter()
        .map(|((year, month), txns)| {
            let (revenue, expenses) = revenue_and_expenses(txns.into_iter());
            MonthlySummary {
                year,
                month,
                revenue,
                expenses,
                profit: revenue - expenses,
            }
        })
        .collect()
}
