//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` entry point. Shared helpers for resolving dates and loading the
//! shift calendar live here.

pub mod export;
pub mod init;
pub mod report;
pub mod shift;
pub mod summary;
pub mod tx;
pub mod week;

use crate::db::shifts::Shifts;
use crate::libs::messages::Message;
use crate::libs::shift::{parse_date, ShiftRecord};
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record or clear the shift for a date", arg_required_else_help = true)]
    Shift(shift::ShiftArgs),
    #[command(about = "Show the weekly shift calendar")]
    Week(week::WeekArgs),
    #[command(about = "Shift summary with work-life balance and streaks")]
    Summary(summary::SummaryArgs),
    #[command(about = "Manage income and expense transactions")]
    Tx(tx::TxArgs),
    #[command(about = "Income and expense report")]
    Report(report::ReportArgs),
    #[command(about = "Export data to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Shift(args) => shift::cmd(args),
            Commands::Week(args) => week::cmd(args),
            Commands::Summary(args) => summary::cmd(args),
            Commands::Tx(args) => tx::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Accepts `today` or an ISO `YYYY-MM-DD` date.
pub(crate) fn resolve_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    if value.trim().eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    parse_date(value).map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

/// Loads the calendar for read-only views. A failed load is reported and
/// treated as an empty calendar.
pub(crate) fn load_shifts_or_empty(shifts: &Shifts) -> Vec<ShiftRecord> {
    match shifts.load_all() {
        Ok(records) => records,
        Err(e) => {
            msg_warning!(Message::ShiftsLoadFailed(e.to_string()));
            Vec::new()
        }
    }
}
