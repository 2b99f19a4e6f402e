use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Header row not found (expected Konto, Namn/Vernr, Ks, , Datum, Text, Transaktionsinfo, Debet, Kredit, Saldo)")]
    HeaderNotFound,

    #[error("No transactions found")]
    EmptyResult,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
