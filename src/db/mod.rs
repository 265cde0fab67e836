//! SQLite persistence for shifts and ledger transactions.
//!
//! One database file lives in the user's data directory (see
//! [`crate::libs::data_storage::DataStorage`]). Opening it through
//! [`db::Db`] applies any pending [`migrations`].
//!
//! ```rust,no_run
//! use shiftlog::db::shifts::Shifts;
//! use shiftlog::libs::shift::ShiftKind;
//! use chrono::NaiveDate;
//!
//! let mut shifts = Shifts::new()?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! shifts.set(date, Some(ShiftKind::Morning))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup.
pub mod db;

/// Store error type shared by the record stores.
pub mod error;

/// Versioned schema migrations.
pub mod migrations;

/// Date-keyed shift records with replace-all writes.
pub mod shifts;

/// Ledger transaction CRUD.
pub mod transactions;
