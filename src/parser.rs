use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{LedgerError, Result};
use crate::models::Transaction;
use crate::normalize::{parse_amount, parse_balance};

// ---------------------------------------------------------------------------
// Huvudbok layout
// ---------------------------------------------------------------------------

const HEADER: [&str; 10] = [
    "Konto",
    "Namn/Vernr",
    "Ks",
    "",
    "Datum",
    "Text",
    "Transaktionsinfo",
    "Debet",
    "Kredit",
    "Saldo",
];

const SUMMARY_LABELS: [&str; 4] = [
    "Ingående balans",
    "Ingående saldo",
    "Omslutning",
    "Utgående saldo",
];

const COL_KONTO: usize = 0;
const COL_NAMN: usize = 1;
const COL_DATUM: usize = 4;
const COL_TEXT: usize = 5;
const COL_INFO: usize = 6;
const COL_DEBET: usize = 7;
const COL_KREDIT: usize = 8;
const COL_SALDO: usize = 9;

fn account_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{3,4}$").expect("static regex"))
}

fn cell<'a>(row: &[&'a str], idx: usize) -> &'a str {
    row.get(idx).map_or("", |c| c.trim())
}

pub fn is_header_row(row: &[&str]) -> bool {
    row.len() >= HEADER.len()
        && HEADER
            .iter()
            .enumerate()
            .all(|(i, expected)| cell(row, i).trim_start_matches('\u{feff}') == *expected)
}

/// Swedish spreadsheet exports are often `;`-separated. Decide from the
/// header line, falling back to the first line.
fn detect_delimiter(text: &str) -> u8 {
    let line = text
        .lines()
        .find(|l| l.contains("Konto") && l.contains("Saldo"))
        .or_else(|| text.lines().next())
        .unwrap_or("");
    let semicolons = line.matches(';').count();
    let commas = line.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

/// Strict `YYYY-MM-DD`: three numeric parts forming a real calendar date.
pub fn parse_date_ymd(raw: &str) -> Option<chrono::NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('-').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let y: i32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let d: u32 = parts[2].parse().ok()?;
    chrono::NaiveDate::from_ymd_opt(y, m, d)
}

// ---------------------------------------------------------------------------
// Row classification, folded over an immutable parser state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    pub number: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub account: Option<CurrentAccount>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    AccountHeader,
    Separator,
    Summary,
    NoAccount,
    NoDate,
    BadDate,
    Entry(Transaction),
}

/// Classify one data row. Returns the state to carry into the next row and
/// what this row is. Only account headers change the state.
pub fn classify_row(state: &ParserState, row: &[&str]) -> (ParserState, RowKind) {
    let konto = cell(row, COL_KONTO);
    if account_header_re().is_match(konto) {
        let next = ParserState {
            account: Some(CurrentAccount {
                number: konto.to_string(),
                name: cell(row, COL_NAMN).to_string(),
            }),
        };
        return (next, RowKind::AccountHeader);
    }

    let kind = if row.iter().any(|c| c.trim().starts_with("---")) {
        RowKind::Separator
    } else if SUMMARY_LABELS.contains(&cell(row, COL_TEXT)) {
        RowKind::Summary
    } else if let Some(account) = &state.account {
        let raw_date = cell(row, COL_DATUM);
        if raw_date.is_empty() {
            RowKind::NoDate
        } else {
            match parse_date_ymd(raw_date) {
                Some(date) => RowKind::Entry(build_transaction(account, date, row)),
                None => RowKind::BadDate,
            }
        }
    } else {
        RowKind::NoAccount
    };
    (state.clone(), kind)
}

fn build_transaction(account: &CurrentAccount, date: chrono::NaiveDate, row: &[&str]) -> Transaction {
    Transaction {
        account_number: account.number.clone(),
        account_name: account.name.clone(),
        date,
        text: cell(row, COL_TEXT).to_string(),
        info: cell(row, COL_INFO).to_string(),
        debit: parse_amount(cell(row, COL_DEBET)),
        credit: parse_amount(cell(row, COL_KREDIT)),
        balance_after: parse_balance(cell(row, COL_SALDO)),
    }
}

// ---------------------------------------------------------------------------
// parse_ledger
// ---------------------------------------------------------------------------

/// Rows dropped during a parse, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    pub separators: usize,
    pub summaries: usize,
    pub without_account: usize,
    pub without_date: usize,
    pub bad_dates: usize,
    pub unreadable: usize,
}

impl SkipStats {
    pub fn total(&self) -> usize {
        self.separators
            + self.summaries
            + self.without_account
            + self.without_date
            + self.bad_dates
            + self.unreadable
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLedger {
    pub transactions: Vec<Transaction>,
    pub accounts: usize,
    pub skipped: SkipStats,
}

struct Fold {
    state: ParserState,
    ledger: ParsedLedger,
}

fn step(mut acc: Fold, line: usize, row: &[&str]) -> Fold {
    let (next, kind) = classify_row(&acc.state, row);
    let skipped = &mut acc.ledger.skipped;
    match kind {
        RowKind::AccountHeader => acc.ledger.accounts += 1,
        RowKind::Entry(txn) => acc.ledger.transactions.push(txn),
        RowKind::Separator => {
            tracing::trace!(line, "skipping separator row");
            skipped.separators += 1;
        }
        RowKind::Summary => {
            tracing::trace!(line, text = cell(row, COL_TEXT), "skipping summary row");
            skipped.summaries += 1;
        }
        RowKind::NoAccount => {
            tracing::trace!(line, "skipping row before first account");
            skipped.without_account += 1;
        }
        RowKind::NoDate => {
            tracing::trace!(line, "skipping row without date");
            skipped.without_date += 1;
        }
        RowKind::BadDate => {
            tracing::trace!(line, date = cell(row, COL_DATUM), "skipping row with unparseable date");
            skipped.bad_dates += 1;
        }
    }
    acc.state = next;
    acc
}

/// Parse huvudbok CSV text into transactions, keeping per-reason skip counts.
pub fn parse_ledger_with_stats(text: &str) -> Result<ParsedLedger> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(detect_delimiter(text))
        .from_reader(text.as_bytes());
    let mut records = rdr.records().enumerate();

    let header_line = records
        .by_ref()
        .find_map(|(i, result)| {
            let record = result.ok()?;
            let row: Vec<&str> = record.iter().collect();
            is_header_row(&row).then_some(i)
        })
        .ok_or(LedgerError::HeaderNotFound)?;
    tracing::debug!(line = header_line, "huvudbok header found");

    let init = Fold {
        state: ParserState::default(),
        ledger: ParsedLedger {
            transactions: Vec::new(),
            accounts: 0,
            skipped: SkipStats::default(),
        },
    };
    let folded = records.fold(init, |mut acc, (line, result)| match result {
        Ok(record) => {
            let row: Vec<&str> = record.iter().collect();
            step(acc, line, &row)
        }
        Err(e) => {
            tracing::trace!(line, error = %e, "skipping unreadable row");
            acc.ledger.skipped.unreadable += 1;
            acc
        }
    });

    let ledger = folded.ledger;
    tracing::info!(
        transactions = ledger.transactions.len(),
        accounts = ledger.accounts,
        skipped = ledger.skipped.total(),
        "huvudbok parsed"
    );
    if ledger.transactions.is_empty() {
        return Err(LedgerError::EmptyResult);
    }
    Ok(ledger)
}

pub fn parse_ledger(text: &str) -> Result<Vec<Transaction>> {
    Ok(parse_ledger_with_stats(text)?.transactions)
}

pub fn parse_ledger_reader<R: Read>(mut reader: R) -> Result<ParsedLedger> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_ledger_with_stats(&text)
}

pub fn parse_ledger_file(file_path: &Path) -> Result<ParsedLedger> {
    let file = std::fs::File::open(file_path)?;
    parse_ledger_reader(std::io::BufReader::new(file))
}
