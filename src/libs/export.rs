//! Data export to CSV and JSON.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftlog::libs::export::{ExportData, ExportFormat, Exporter};
//! use chrono::Local;
//!
//! let exporter = Exporter::new(ExportFormat::Csv, ExportData::Shifts, None, Local::now().naive_local());
//! exporter.export_shifts(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::insights::{badge_message, empathy_messages};
use crate::libs::ledger::{LedgerSummary, Transaction};
use crate::libs::messages::Message;
use crate::libs::metrics::{ShiftDataPoint, ShiftMetrics, ShiftSummary};
use crate::libs::shift::ShiftRecord;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every recorded shift
    Shifts,
    /// Every ledger transaction
    Transactions,
    /// Shift metrics and feedback for one period
    Summary,
}

impl ExportData {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportData::Shifts => "shifts",
            ExportData::Transactions => "transactions",
            ExportData::Summary => "summary",
        }
    }
}

/// Flattened summary written by `export summary`.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub period: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub generated_at: NaiveDateTime,
    pub metrics: ShiftMetrics,
    pub shifts: Vec<ShiftDataPoint>,
    pub badge: String,
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerSummary>,
}

impl ExportSummary {
    pub fn build(summary: &ShiftSummary, recorded_total: usize, ledger: Option<LedgerSummary>, now: NaiveDateTime) -> Self {
        ExportSummary {
            period: summary.period.token().to_string(),
            start: summary.start,
            end: summary.end,
            generated_at: now,
            metrics: summary.metrics,
            shifts: summary.histogram.chart_data(),
            badge: badge_message(&summary.metrics, recorded_total),
            messages: empathy_messages(&summary.metrics, &summary.period.period_text(), recorded_total),
            ledger,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `shiftlog_<data>_<timestamp>.<ext>`.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>, now: NaiveDateTime) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "shiftlog_{}_{}.{}",
                data.as_str(),
                now.format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_shifts(&self, records: &[ShiftRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_csv(records)?,
            ExportFormat::Json => self.write_json(&records)?,
        }
        self.completed(records.len());
        Ok(())
    }

    pub fn export_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_csv(transactions)?,
            ExportFormat::Json => self.write_json(&transactions)?,
        }
        self.completed(transactions.len());
        Ok(())
    }

    pub fn export_summary(&self, summary: &ExportSummary) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_summary_csv(summary)?,
            ExportFormat::Json => self.write_json(summary)?,
        }
        self.completed(1);
        Ok(())
    }

    fn write_csv<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_summary_csv(&self, summary: &ExportSummary) -> Result<()> {
        // Sections have different shapes, so the rows are not all the same length.
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        let metrics = &summary.metrics;
        let fields = [
            ("Period", summary.period.clone()),
            ("Start", summary.start.to_string()),
            ("End", summary.end.to_string()),
            ("Badge", summary.badge.clone()),
            ("Work-life balance", metrics.work_life_balance.to_string()),
            ("Consecutive work days", metrics.consecutive_work_days.to_string()),
            ("Afternoon to morning", metrics.afternoon_to_morning_count.to_string()),
            ("Total shifts", metrics.total_shifts.to_string()),
            ("Night shifts", metrics.night_shift_count.to_string()),
        ];

        wtr.write_record(["SUMMARY", ""])?;
        for (name, value) in &fields {
            wtr.write_record([*name, value.as_str()])?;
        }

        wtr.write_record(["", ""])?;
        wtr.write_record(["SHIFTS", ""])?;
        wtr.write_record(["Kind", "Count"])?;
        for point in &summary.shifts {
            let count = point.count.to_string();
            wtr.write_record([point.kind.as_str(), count.as_str()])?;
        }

        wtr.write_record(["", ""])?;
        wtr.write_record(["MESSAGES"])?;
        for message in &summary.messages {
            wtr.write_record([message.as_str()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn completed(&self, rows: usize) {
        msg_debug!(format!("exported {} rows", rows));
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
    }
}
