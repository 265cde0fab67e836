//! Income and expense ledger.
//!
//! Transactions carry a fixed category id from [`categories`]. Reports are
//! computed from a snapshot of transactions and an explicit `today`, the
//! same way shift metrics take an explicit `now`.

use crate::libs::calendar::week_start;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("unknown {kind} category '{category}'")]
    UnknownCategory { kind: TransactionType, category: String },

    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("unknown transaction type '{0}', expected income or expense")]
    UnknownType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(LedgerError::UnknownType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

const INCOME_CATEGORIES: [Category; 4] = [
    Category { id: "salary", name: "Salary" },
    Category { id: "bonus", name: "Bonus" },
    Category { id: "investment", name: "Investment" },
    Category { id: "other_income", name: "Other income" },
];

const EXPENSE_CATEGORIES: [Category; 9] = [
    Category { id: "food", name: "Food" },
    Category { id: "transport", name: "Transport" },
    Category { id: "utilities", name: "Utilities" },
    Category { id: "rent", name: "Rent" },
    Category { id: "entertainment", name: "Entertainment" },
    Category { id: "shopping", name: "Shopping" },
    Category { id: "education", name: "Education" },
    Category { id: "healthcare", name: "Healthcare" },
    Category { id: "other_expense", name: "Other expense" },
];

pub fn categories(kind: TransactionType) -> &'static [Category] {
    match kind {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Display name for a category id, falling back to the id itself.
pub fn category_name(id: &str) -> &str {
    INCOME_CATEGORIES
        .iter()
        .chain(EXPENSE_CATEGORIES.iter())
        .find(|category| category.id == id)
        .map(|category| category.name)
        .unwrap_or(id)
}

/// A prefilled quick entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion {
    pub amount: f64,
    pub description: &'static str,
    pub category: &'static str,
}

const INCOME_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion { amount: 30000.0, description: "Salary", category: "salary" },
    Suggestion { amount: 5000.0, description: "Bonus", category: "bonus" },
    Suggestion { amount: 1000.0, description: "Dividends", category: "investment" },
];

const EXPENSE_SUGGESTIONS: [Suggestion; 5] = [
    Suggestion { amount: 200.0, description: "Lunch", category: "food" },
    Suggestion { amount: 500.0, description: "Fuel", category: "transport" },
    Suggestion { amount: 5000.0, description: "House rent", category: "rent" },
    Suggestion { amount: 1000.0, description: "Electricity bill", category: "utilities" },
    Suggestion { amount: 500.0, description: "Movie", category: "entertainment" },
];

pub fn suggestions(kind: TransactionType) -> &'static [Suggestion] {
    match kind {
        TransactionType::Income => &INCOME_SUGGESTIONS,
        TransactionType::Expense => &EXPENSE_SUGGESTIONS,
    }
}

/// A stored ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDateTime,
}

impl Transaction {
    /// Amount with its sign: income positive, expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

/// Input for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: String,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(self.amount));
        }
        if !categories(self.kind).iter().any(|category| category.id == self.category) {
            return Err(LedgerError::UnknownCategory {
                kind: self.kind,
                category: self.category.clone(),
            });
        }
        Ok(())
    }

    pub fn from_suggestion(kind: TransactionType, suggestion: &Suggestion) -> Self {
        NewTransaction {
            kind,
            amount: suggestion.amount,
            description: suggestion.description.to_string(),
            category: suggestion.category.to_string(),
        }
    }
}

/// Income and expense booked on one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// One entry per day for the `days` days ending on `today`, oldest first.
pub fn daily_report(transactions: &[Transaction], days: u32, today: NaiveDate) -> Vec<DailyTotals> {
    (0..days as i64)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let mut totals = DailyTotals {
                date,
                income: 0.0,
                expense: 0.0,
            };
            for transaction in transactions.iter().filter(|t| t.date.date() == date) {
                match transaction.kind {
                    TransactionType::Income => totals.income += transaction.amount,
                    TransactionType::Expense => totals.expense += transaction.amount,
                }
            }
            totals
        })
        .collect()
}

/// Net totals shown above the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub daily_total: f64,
    pub weekly_total: f64,
}

impl LedgerSummary {
    /// Net of today and of the Monday-start week containing today.
    pub fn compute(transactions: &[Transaction], today: NaiveDate) -> Self {
        let monday = week_start(today);
        let sunday = monday + Duration::days(6);

        let mut summary = LedgerSummary {
            daily_total: 0.0,
            weekly_total: 0.0,
        };
        for transaction in transactions {
            let date = transaction.date.date();
            if date == today {
                summary.daily_total += transaction.signed_amount();
            }
            if date >= monday && date <= sunday {
                summary.weekly_total += transaction.signed_amount();
            }
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Per-category totals of one transaction type, largest first.
pub fn category_breakdown(transactions: &[Transaction], kind: TransactionType) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(transaction.category.as_str()).or_default() += transaction.amount;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    breakdown
}

/// Formats an amount with the configured currency symbol.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: i64, kind: TransactionType, amount: f64, category: &str, day: NaiveDate) -> Transaction {
        Transaction {
            id,
            kind,
            amount,
            description: String::new(),
            category: category.to_string(),
            date: day.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut new = NewTransaction {
            kind: TransactionType::Expense,
            amount: 200.0,
            description: "Lunch".to_string(),
            category: "food".to_string(),
        };
        assert!(new.validate().is_ok());

        new.category = "salary".to_string();
        assert!(matches!(new.validate(), Err(LedgerError::UnknownCategory { .. })));

        new.category = "food".to_string();
        new.amount = 0.0;
        assert_eq!(new.validate(), Err(LedgerError::InvalidAmount(0.0)));
        new.amount = f64::NAN;
        assert!(matches!(new.validate(), Err(LedgerError::InvalidAmount(_))));
    }

    #[test]
    fn test_suggestions_use_known_categories() {
        for kind in TransactionType::ALL {
            for suggestion in suggestions(kind) {
                assert!(NewTransaction::from_suggestion(kind, suggestion).validate().is_ok());
            }
        }
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name("healthcare"), "Healthcare");
        assert_eq!(category_name("mystery"), "mystery");
    }

    #[test]
    fn test_daily_report_covers_each_day_oldest_first() {
        let today = date(2024, 3, 10);
        let transactions = vec![
            tx(1, TransactionType::Income, 1000.0, "bonus", date(2024, 3, 10)),
            tx(2, TransactionType::Expense, 200.0, "food", date(2024, 3, 10)),
            tx(3, TransactionType::Expense, 50.0, "food", date(2024, 3, 8)),
            tx(4, TransactionType::Expense, 999.0, "rent", date(2024, 3, 1)),
        ];
        let report = daily_report(&transactions, 7, today);
        assert_eq!(report.len(), 7);
        assert_eq!(report[0].date, date(2024, 3, 4));
        assert_eq!(report[6], DailyTotals { date: today, income: 1000.0, expense: 200.0 });
        assert_eq!(report[4].expense, 50.0);
        assert_eq!(report.iter().map(|day| day.expense).sum::<f64>(), 250.0);
    }

    #[test]
    fn test_summary_is_net_of_today_and_week() {
        // 2024-03-13 is a Wednesday
        let today = date(2024, 3, 13);
        let transactions = vec![
            tx(1, TransactionType::Income, 500.0, "bonus", today),
            tx(2, TransactionType::Expense, 120.0, "food", today),
            tx(3, TransactionType::Expense, 80.0, "transport", date(2024, 3, 11)),
            tx(4, TransactionType::Expense, 1000.0, "rent", date(2024, 3, 10)),
        ];
        let summary = LedgerSummary::compute(&transactions, today);
        assert_eq!(summary.daily_total, 380.0);
        assert_eq!(summary.weekly_total, 300.0);
    }

    #[test]
    fn test_category_breakdown_sorted_descending() {
        let day = date(2024, 3, 1);
        let transactions = vec![
            tx(1, TransactionType::Expense, 100.0, "food", day),
            tx(2, TransactionType::Expense, 300.0, "rent", day),
            tx(3, TransactionType::Expense, 250.0, "food", day),
            tx(4, TransactionType::Income, 900.0, "salary", day),
        ];
        let breakdown = category_breakdown(&transactions, TransactionType::Expense);
        assert_eq!(
            breakdown,
            vec![
                CategoryTotal { category: "food".to_string(), total: 350.0 },
                CategoryTotal { category: "rent".to_string(), total: 300.0 },
            ]
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("฿", 1234.5), "฿1234.50");
        assert_eq!(format_amount("$", -20.0), "-$20.00");
    }
}
