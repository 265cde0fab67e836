use super::now;
use crate::{
    db::transactions::Transactions,
    libs::{
        config::{Config, REPORT_DAY_CHOICES},
        ledger::{category_breakdown, daily_report, format_amount, LedgerSummary, TransactionType},
        messages::Message,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report length in days (7, 15 or 30). Defaults to the configured length.
    #[arg(short, long, value_parser = parse_days)]
    days: Option<u32>,

    /// Also break totals down by category
    #[arg(short, long)]
    categories: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let ledger = Config::read().unwrap_or_default().ledger();
    let days = args.days.unwrap_or(ledger.report_days);
    let currency = ledger.currency_symbol.as_str();
    let today = now().date();

    let transactions = Transactions::new()?.fetch_all()?;
    let summary = LedgerSummary::compute(&transactions, today);

    msg_print!(Message::DailyTotal(format_amount(currency, summary.daily_total)));
    msg_print!(Message::WeeklyTotal(format_amount(currency, summary.weekly_total)));

    msg_print!(Message::LedgerReportHeader(days), true);
    View::daily_report(&daily_report(&transactions, days, today), currency);

    if args.categories {
        for kind in TransactionType::ALL {
            let breakdown = category_breakdown(&transactions, kind);
            if breakdown.is_empty() {
                continue;
            }
            msg_print!(Message::CategoryBreakdownHeader(kind.label().to_string()), true);
            View::category_breakdown(&breakdown, currency);
        }
    }

    Ok(())
}

fn parse_days(value: &str) -> Result<u32, String> {
    let days: u32 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    if REPORT_DAY_CHOICES.contains(&days) {
        Ok(days)
    } else {
        Err(format!("expected one of {:?}", REPORT_DAY_CHOICES))
    }
}
