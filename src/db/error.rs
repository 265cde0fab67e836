use crate::libs::ledger::LedgerError;

/// Failures of the local record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read saved data: {0}")]
    Read(#[source] rusqlite::Error),

    #[error("failed to save data: {0}")]
    Write(#[source] rusqlite::Error),

    #[error("malformed stored record: {0}")]
    MalformedRecord(String),

    #[error("more than one shift recorded for {0}")]
    DuplicateDate(String),

    #[error("transaction #{0} not found")]
    TransactionNotFound(i64),

    #[error(transparent)]
    Invalid(#[from] LedgerError),
}
