use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::libs::shift::{apply_shift_choice, toggle_shift, ShiftKind, ShiftRecord, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::path::Path;

const SELECT_ALL: &str = "SELECT date, kind FROM shifts ORDER BY rowid";
const DELETE_ALL: &str = "DELETE FROM shifts";
const INSERT: &str = "INSERT INTO shifts (date, kind) VALUES (?1, ?2)";

/// The shift record store. Every write replaces the whole sequence.
pub struct Shifts {
    conn: Connection,
}

impl Shifts {
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Shifts { conn: db.conn }
    }

    /// All records in the order they were last written.
    pub fn load_all(&self) -> Result<Vec<ShiftRecord>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_ALL).map_err(StoreError::Read)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(StoreError::Read)?;

        let mut records = Vec::new();
        for row in rows {
            let (date, kind) = row.map_err(StoreError::Read)?;
            let record = ShiftRecord::parse(&date, &kind).map_err(|e| StoreError::MalformedRecord(e.to_string()))?;
            records.push(record);
        }

        tracing::debug!(count = records.len(), "loaded shift records");
        Ok(records)
    }

    /// Replaces the stored sequence with `records`, atomically.
    ///
    /// A sequence holding the same date twice is rejected before anything
    /// is written.
    pub fn replace_all(&mut self, records: &[ShiftRecord]) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.date)) {
            return Err(StoreError::DuplicateDate(duplicate.date.format(DATE_FORMAT).to_string()));
        }

        let tx = self.conn.transaction().map_err(StoreError::Write)?;
        tx.execute(DELETE_ALL, []).map_err(StoreError::Write)?;
        {
            let mut stmt = tx.prepare(INSERT).map_err(StoreError::Write)?;
            for record in records {
                stmt.execute(params![record.date.format(DATE_FORMAT).to_string(), record.kind.as_str()])
                    .map_err(StoreError::Write)?;
            }
        }
        tx.commit().map_err(StoreError::Write)?;

        tracing::debug!(count = records.len(), "replaced shift records");
        Ok(())
    }

    /// Sets or clears the shift for `date` and returns the stored sequence.
    ///
    /// Nothing is written when the current sequence fails to load.
    pub fn set(&mut self, date: NaiveDate, choice: Option<ShiftKind>) -> Result<Vec<ShiftRecord>, StoreError> {
        let updated = apply_shift_choice(&self.load_all()?, date, choice);
        self.replace_all(&updated)?;
        Ok(updated)
    }

    /// Records `kind` for `date`, or clears it when it is already stored.
    pub fn toggle(&mut self, date: NaiveDate, kind: ShiftKind) -> Result<Vec<ShiftRecord>, StoreError> {
        let updated = toggle_shift(&self.load_all()?, date, kind);
        self.replace_all(&updated)?;
        Ok(updated)
    }
}
