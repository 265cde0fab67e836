use super::{load_shifts_or_empty, now};
use crate::{
    db::{error::StoreError, shifts::Shifts, transactions::Transactions},
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, ExportSummary, Exporter},
        ledger::{LedgerSummary, Transaction},
        messages::Message,
        metrics::ShiftSummary,
        period::Period,
    },
    msg_info, msg_warning,
};
use chrono::NaiveDate;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "shifts")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Window for `summary` exports. Defaults to the configured period.
    #[arg(short, long, value_enum)]
    period: Option<Period>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let now = now();
    msg_info!(Message::ExportingData(
        args.data.as_str().to_string(),
        args.format.extension().to_string()
    ));

    let exporter = Exporter::new(args.format, args.data, args.output, now);

    match args.data {
        ExportData::Shifts => exporter.export_shifts(&Shifts::new()?.load_all()?),
        ExportData::Transactions => exporter.export_transactions(&Transactions::new()?.fetch_all()?),
        ExportData::Summary => {
            let period = args.period.unwrap_or_else(|| Config::read().unwrap_or_default().default_period());
            let records = load_shifts_or_empty(&Shifts::new()?);
            let summary = ShiftSummary::derive(&records, period, now);
            let ledger = ledger_summary(Transactions::new()?.fetch_all(), now.date());
            exporter.export_summary(&ExportSummary::build(&summary, records.len(), ledger, now))
        }
    }
}

/// Ledger totals for the summary export. An unreadable ledger is reported and left out.
fn ledger_summary(transactions: Result<Vec<Transaction>, StoreError>, today: NaiveDate) -> Option<LedgerSummary> {
    match transactions {
        Ok(transactions) => Some(LedgerSummary::compute(&transactions, today)),
        Err(e) => {
            msg_warning!(Message::TransactionsLoadFailed(e.to_string()));
            None
        }
    }
}
