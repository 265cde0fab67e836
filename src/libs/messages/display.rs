//! Display implementation for shiftlog application messages.
//!
//! All user-facing text lives here, in one match. Labels are fixed-locale
//! English strings; badge texts are lowercase because they are rendered
//! inside a tag next to the summary title.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHIFT MESSAGES ===
            Message::ShiftRecorded(date, label) => format!("{} recorded for {}", label, date),
            Message::ShiftCleared(date) => format!("Shift cleared for {}", date),
            Message::TodayShift(emoji, label) => format!("Today: {} {}", emoji, label),
            Message::NoShiftToday => "No shift recorded for today".to_string(),
            Message::ShiftsLoadFailed(error) => format!("Failed to load saved shifts: {}", error),
            Message::ShiftsSaveFailed(error) => format!("Failed to save shifts, please try again: {}", error),
            Message::ShiftKindPrompt(date) => format!("Select the shift type for {}", date),

            // === CALENDAR MESSAGES ===
            Message::WeekHeader(month) => format!("Shift calendar, {}", month),
            Message::WeekRange(first, last) => format!("Week {} - {}", first, last),

            // === SUMMARY MESSAGES ===
            Message::SummaryHeader(period) => format!("Shift summary ({})", period),
            Message::NoShiftsRecorded => "No shifts recorded yet. Use `shiftlog shift <date> <kind>` to add one.".to_string(),
            Message::WorkLifeBalance(percent) => format!("Work-life balance: {}%", percent),
            Message::WorkLifeBalanceHint => "higher is better".to_string(),
            Message::ConsecutiveWorkDays(days) => format!("Longest run of consecutive work days: {} days", days),
            Message::ShiftCountsHeader => "Shifts by type".to_string(),

            // === EMPATHY MESSAGES ===
            Message::EmpathyAfternoonToMorning { period_text, count } => format!(
                "{} you worked an afternoon shift followed by a morning shift {} times. Please make sure you get enough rest 😊",
                period_text, count
            ),
            Message::EmpathyFrequentNights => "You work night shifts quite often. Don't forget to look after your health 💪".to_string(),
            Message::EmpathyLongStreak(days) => format!("You worked {} days in a row. Please make sure you get enough rest 😴", days),
            Message::EmpathyLowBalance(percent) => {
                format!("Your work-life balance is rather low ({}%). Try to find more time to rest 🏖️", percent)
            }
            Message::EmpathyThanks => "Thank you for all your hard work, you are our hero! 🦸".to_string(),

            // === BADGE MESSAGES ===
            Message::BadgeNoShifts => "no shifts recorded yet".to_string(),
            Message::BadgeJustStarted => "just started recording".to_string(),
            Message::BadgeGatheringData => "still gathering data".to_string(),
            Message::BadgeUrgentRest => "urgent rest needed".to_string(),
            Message::BadgeMoreRest => "more rest recommended".to_string(),
            Message::BadgeTakeBreakSoon => "take a break soon".to_string(),
            Message::BadgeLongStreak => "long working streak".to_string(),
            Message::BadgeNearStreakLimit => "approaching the consecutive work limit".to_string(),
            Message::BadgeTooManyAfternoonToMorning => "too many afternoon-to-morning shifts".to_string(),
            Message::BadgeAfternoonToMorning => "afternoon-to-morning shifts detected".to_string(),
            Message::BadgeTooManyNights => "too many night shifts".to_string(),
            Message::BadgeManyNights => "quite a lot of night shifts".to_string(),
            Message::BadgeBalanceExcellent => "excellent work-life balance".to_string(),
            Message::BadgeBalanceGood => "good work-life balance".to_string(),
            Message::BadgeBalanceNormal => "normal work-life balance".to_string(),

            // === LEDGER MESSAGES ===
            Message::TransactionAdded(id) => format!("Transaction #{} added", id),
            Message::TransactionUpdated(id) => format!("Transaction #{} updated", id),
            Message::TransactionDeleted(id) => format!("Transaction #{} deleted", id),
            Message::TransactionNotFound(id) => format!("Transaction #{} not found", id),
            Message::TransactionsEmpty => "No transactions yet".to_string(),
            Message::TransactionsLoadFailed(error) => format!("Failed to load transactions, exporting without ledger totals: {}", error),
            Message::TransactionsHeader => "Transactions".to_string(),
            Message::ConfirmDeleteTransaction(id) => format!("Delete transaction #{}?", id),
            Message::LedgerReportHeader(days) => format!("Income and expenses for the last {} days", days),
            Message::CategoryBreakdownHeader(kind) => format!("{} by category", kind),
            Message::DailyTotal(amount) => format!("Today: {}", amount),
            Message::WeeklyTotal(amount) => format!("This week: {}", amount),
            Message::SuggestionsHeader(kind) => format!("Quick {} suggestions", kind),
            Message::PromptTransactionType => "Transaction type".to_string(),
            Message::PromptAmount => "Amount".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptCategory => "Category".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::ConfigModuleSummary => "Summary settings".to_string(),
            Message::ConfigModuleLedger => "Ledger settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDefaultPeriod => "Default summary period (7, 30, 90, 365, all)".to_string(),
            Message::PromptCurrencySymbol => "Currency symbol".to_string(),
            Message::PromptReportDays => "Default report length in days".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),

            // === GENERAL MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected 'today' or YYYY-MM-DD", value),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
