//! Analysis windows and the start-date anchor for each of them.

use crate::libs::shift::ShiftRecord;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rolling window selector for the shift summary.
///
/// Serialized and parsed as its token: `7`, `30`, `90`, `365` or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(into = "String", try_from = "String")]
pub enum Period {
    #[value(name = "7")]
    Week,
    #[default]
    #[value(name = "30")]
    Month,
    #[value(name = "90")]
    Quarter,
    #[value(name = "365")]
    Year,
    #[value(name = "all")]
    All,
}

impl Period {
    pub const ALL: [Period; 5] = [Period::Week, Period::Month, Period::Quarter, Period::Year, Period::All];

    /// Window length in days, `None` for the full history.
    pub fn days(self) -> Option<i64> {
        match self {
            Period::Week => Some(7),
            Period::Month => Some(30),
            Period::Quarter => Some(90),
            Period::Year => Some(365),
            Period::All => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Period::Week => "7",
            Period::Month => "30",
            Period::Quarter => "90",
            Period::Year => "365",
            Period::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Last 7 days",
            Period::Month => "Last 30 days",
            Period::Quarter => "Last 90 days",
            Period::Year => "Last year",
            Period::All => "All time",
        }
    }

    /// Sentence prefix used by empathy messages.
    pub fn period_text(self) -> String {
        match self {
            Period::All => "Over the whole period".to_string(),
            other => format!("In the {}", other.label().to_lowercase()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period '{0}', expected one of 7, 30, 90, 365, all")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Period::ALL
            .into_iter()
            .find(|period| period.token() == token)
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.token().to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = UnknownPeriod;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Computes the inclusive start of the analysis window.
///
/// - `All` with records: the earliest record date (at midnight).
/// - `All` without records: `now`, which makes the window empty.
/// - Otherwise: `now` minus the window length, keeping the time of day.
pub fn compute_start_date(period: Period, records: &[ShiftRecord], now: NaiveDateTime) -> NaiveDateTime {
    match period.days() {
        Some(days) => now - Duration::days(days),
        None => records.iter().map(ShiftRecord::instant).min().unwrap_or(now),
    }
}
