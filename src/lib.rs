//! shiftlog: a shift calendar with work-life analytics and a pocket ledger.
//!
//! - [`libs`]: domain types and the pure derivation core (periods, metrics,
//!   feedback rules, calendar, ledger reports) plus config and presentation.
//! - [`db`]: SQLite persistence for shifts and transactions.
//! - [`commands`]: the `clap` command-line surface.

pub mod commands;
pub mod db;
pub mod libs;
