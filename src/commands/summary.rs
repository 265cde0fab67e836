//! Shift summary for a rolling window.
//!
//! Prints the status badge, the three main shift counts, every applicable
//! encouragement message, the work-life balance, the shift histogram and the
//! longest work streak.

use super::{load_shifts_or_empty, now};
use crate::{
    db::shifts::Shifts,
    libs::{
        config::Config,
        insights::{badge_message, empathy_messages},
        messages::Message,
        metrics::ShiftSummary,
        period::Period,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Window in days: 7, 30, 90, 365 or all. Defaults to the configured period.
    #[arg(short, long, value_enum)]
    period: Option<Period>,
}

pub fn cmd(args: SummaryArgs) -> Result<()> {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    });
    let period = args.period.unwrap_or_else(|| config.default_period());

    let records = load_shifts_or_empty(&Shifts::new()?);
    let summary = ShiftSummary::derive(&records, period, now());
    let metrics = &summary.metrics;

    msg_print!(
        format!(
            "{} · {}",
            Message::SummaryHeader(period.label().to_string()),
            badge_message(metrics, records.len())
        ),
        true
    );

    if records.is_empty() {
        msg_info!(Message::NoShiftsRecorded);
    }

    View::summary(&summary);

    for message in empathy_messages(metrics, &period.period_text(), records.len()) {
        msg_print!(message);
    }

    msg_print!(
        format!("{} ({})", Message::WorkLifeBalance(metrics.work_life_balance), Message::WorkLifeBalanceHint),
        true
    );

    msg_print!(Message::ShiftCountsHeader);
    View::histogram(&summary);

    msg_print!(Message::ConsecutiveWorkDays(metrics.consecutive_work_days), true);
    Ok(())
}
