use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::libs::ledger::{NewTransaction, Transaction, TransactionType};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_ALL: &str = "SELECT id, type, amount, description, category, date FROM transactions ORDER BY date DESC, id DESC";
const SELECT_BY_ID: &str = "SELECT id, type, amount, description, category, date FROM transactions WHERE id = ?1";
const INSERT: &str = "INSERT INTO transactions (type, amount, description, category, date) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE: &str = "UPDATE transactions SET type = ?1, amount = ?2, description = ?3, category = ?4 WHERE id = ?5";
const DELETE: &str = "DELETE FROM transactions WHERE id = ?1";

pub struct Transactions {
    conn: Connection,
}

/// Raw row before the type and timestamp are parsed.
type RawTransaction = (i64, String, f64, String, String, String);

impl Transactions {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Transactions { conn: db.conn }
    }

    /// All transactions, newest first.
    pub fn fetch_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL).map_err(StoreError::Read)?;
        let rows = stmt.query_map([], raw_row).map_err(StoreError::Read)?;

        let mut transactions = Vec::new();
        for row in rows {
            transactions.push(parse_row(row.map_err(StoreError::Read)?)?);
        }
        Ok(transactions)
    }

    pub fn fetch(&self, id: i64) -> Result<Option<Transaction>, StoreError> {
        let raw = self
            .conn
            .query_row(SELECT_BY_ID, [id], raw_row)
            .optional()
            .map_err(StoreError::Read)?;
        raw.map(parse_row).transpose()
    }

    /// Validates and stores a new transaction dated `now`.
    pub fn insert(&mut self, new: &NewTransaction, now: NaiveDateTime) -> Result<Transaction, StoreError> {
        new.validate()?;
        self.conn
            .execute(
                INSERT,
                params![
                    new.kind.as_str(),
                    new.amount,
                    new.description,
                    new.category,
                    now.format(TIMESTAMP_FORMAT).to_string()
                ],
            )
            .map_err(StoreError::Write)?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, kind = %new.kind, amount = new.amount, "inserted transaction");

        Ok(Transaction {
            id,
            kind: new.kind,
            amount: new.amount,
            description: new.description.clone(),
            category: new.category.clone(),
            date: now,
        })
    }

    /// Overwrites the editable fields of `transaction`. The date is kept.
    pub fn update(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        NewTransaction {
            kind: transaction.kind,
            amount: transaction.amount,
            description: transaction.description.clone(),
            category: transaction.category.clone(),
        }
        .validate()?;

        let changed = self
            .conn
            .execute(
                UPDATE,
                params![
                    transaction.kind.as_str(),
                    transaction.amount,
                    transaction.description,
                    transaction.category,
                    transaction.id
                ],
            )
            .map_err(StoreError::Write)?;

        if changed == 0 {
            return Err(StoreError::TransactionNotFound(transaction.id));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        let changed = self.conn.execute(DELETE, [id]).map_err(StoreError::Write)?;
        if changed == 0 {
            return Err(StoreError::TransactionNotFound(id));
        }
        Ok(())
    }
}

fn raw_row(row: &Row<'_>) -> rusqlite::Result<RawTransaction> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?, row.get(5)?))
}

fn parse_row((id, kind, amount, description, category, date): RawTransaction) -> Result<Transaction, StoreError> {
    let kind: TransactionType = kind
        .parse()
        .map_err(|e: crate::libs::ledger::LedgerError| StoreError::MalformedRecord(format!("transaction #{}: {}", id, e)))?;
    let date = NaiveDateTime::parse_from_str(&date, TIMESTAMP_FORMAT)
        .map_err(|e| StoreError::MalformedRecord(format!("transaction #{}: {}", id, e)))?;

    Ok(Transaction {
        id,
        kind,
        amount,
        description,
        category,
        date,
    })
}
