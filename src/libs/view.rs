//! Terminal tables for the shift calendar, summary and ledger.

use super::calendar::{text_color, CalendarWeek, WEEKDAY_HEADERS};
use super::ledger::{category_name, format_amount, CategoryTotal, DailyTotals, Suggestion, Transaction};
use super::metrics::ShiftSummary;
use super::shift::ShiftKind;
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// One row per week with the day number and shift emoji, today in brackets.
    /// Recorded days are colored by shift kind.
    pub fn week_table(weeks: &[CalendarWeek], today: NaiveDate) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(WEEKDAY_HEADERS.iter().map(|day| Cell::new(day)).collect()));
        for week in weeks {
            let cells = week
                .days
                .iter()
                .map(|day| {
                    let mut text = day.date.format("%d").to_string();
                    if let Some(kind) = day.shift {
                        text = format!("{} {}", text, kind.emoji());
                    }
                    if day.date == today {
                        text = format!("[{}]", text);
                    }
                    let cell = Cell::new(&text);
                    match day.shift {
                        Some(kind) => cell.style_spec(&shift_style(kind)),
                        None => cell,
                    }
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        table
    }

    pub fn week(weeks: &[CalendarWeek], today: NaiveDate) {
        Self::week_table(weeks, today).printstd();
    }

    /// The three main shift kinds as cards, followed by the balance and streak.
    pub fn summary_table(summary: &ShiftSummary) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(
            ShiftKind::WORKING
                .iter()
                .map(|kind| Cell::new(&format!("{} {}", kind.emoji(), kind.label())))
                .collect(),
        ));
        table.add_row(Row::new(
            ShiftKind::WORKING
                .iter()
                .map(|kind| Cell::new(&summary.histogram.get(*kind).to_string()))
                .collect(),
        ));
        table
    }

    pub fn summary(summary: &ShiftSummary) {
        Self::summary_table(summary).printstd();
    }

    /// Count and share of each shift kind, in chart order.
    pub fn histogram_table(summary: &ShiftSummary) -> Table {
        let mut table = Table::new();
        let total = summary.histogram.total();

        table.set_titles(row!["SHIFT", "COUNT", "SHARE"]);
        for point in summary.histogram.chart_data() {
            let share = if total > 0 {
                point.count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            table.add_row(row![
                format!("{} {}", point.kind.emoji(), point.kind.label()),
                point.count,
                format!("{:.0}%", share)
            ]);
        }
        table
    }

    pub fn histogram(summary: &ShiftSummary) {
        Self::histogram_table(summary).printstd();
    }

    pub fn transactions_table(transactions: &[Transaction], currency: &str) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "DATE", "TYPE", "CATEGORY", "DESCRIPTION", "AMOUNT"]);
        for transaction in transactions {
            table.add_row(row![
                transaction.id,
                transaction.date.format("%Y-%m-%d %H:%M"),
                transaction.kind.label(),
                category_name(&transaction.category),
                transaction.description,
                r->format_amount(currency, transaction.signed_amount())
            ]);
        }
        table
    }

    pub fn transactions(transactions: &[Transaction], currency: &str) {
        Self::transactions_table(transactions, currency).printstd();
    }

    pub fn daily_report_table(report: &[DailyTotals], currency: &str) -> Table {
        let mut table = Table::new();
        let mut income = 0.0;
        let mut expense = 0.0;

        table.set_titles(row!["DATE", "INCOME", "EXPENSE"]);
        for day in report {
            income += day.income;
            expense += day.expense;
            table.add_row(row![
                day.date.format("%d %b"),
                r->format_amount(currency, day.income),
                r->format_amount(currency, day.expense)
            ]);
        }
        table.add_row(row![
            b->"TOTAL",
            rb->format_amount(currency, income),
            rb->format_amount(currency, expense)
        ]);
        table
    }

    pub fn daily_report(report: &[DailyTotals], currency: &str) {
        Self::daily_report_table(report, currency).printstd();
    }

    pub fn category_breakdown(breakdown: &[CategoryTotal], currency: &str) {
        let mut table = Table::new();

        table.set_titles(row!["CATEGORY", "TOTAL"]);
        for entry in breakdown {
            table.add_row(row![category_name(&entry.category), r->format_amount(currency, entry.total)]);
        }
        table.printstd();
    }

    pub fn suggestions(suggestions: &[Suggestion], currency: &str) {
        let mut table = Table::new();

        table.set_titles(row!["#", "DESCRIPTION", "CATEGORY", "AMOUNT"]);
        for (index, suggestion) in suggestions.iter().enumerate() {
            table.add_row(row![
                index + 1,
                suggestion.description,
                category_name(suggestion.category),
                r->format_amount(currency, suggestion.amount)
            ]);
        }
        table.printstd();
    }
}

/// Terminal background for `kind`, with black or white text picked from its chart color.
fn shift_style(kind: ShiftKind) -> String {
    let background = match kind {
        ShiftKind::Morning => 'b',
        ShiftKind::Afternoon => 'y',
        ShiftKind::Night => 'm',
        ShiftKind::DayOff | ShiftKind::Leave => 'd',
    };
    let text = if text_color(kind.color()) == "#000000" { 'd' } else { 'w' };
    format!("B{}F{}", background, text)
}
