//! Shift kinds and date-tagged shift records.
//!
//! A [`ShiftRecord`] assigns exactly one [`ShiftKind`] to a calendar date.
//! The recorder keeps at most one record per date: choosing a shift for a
//! date replaces whatever was stored there before (see [`apply_shift_choice`]).
//!
//! ## Storage keys
//!
//! Kinds are persisted and exported using stable lowercase keys:
//!
//! | Kind        | Key         | Counts as work |
//! |-------------|-------------|----------------|
//! | Morning     | `morning`   | yes            |
//! | Afternoon   | `afternoon` | yes            |
//! | Night       | `night`     | yes            |
//! | Day off     | `day_off`   | no             |
//! | Leave       | `leave`     | no             |

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 8601 calendar date format used for every stored date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while turning raw strings into shift records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShiftError {
    #[error("unknown shift kind: '{0}'")]
    UnknownKind(String),

    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
}

/// The category assigned to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Night,
    DayOff,
    Leave,
}

impl ShiftKind {
    pub const COUNT: usize = 5;

    /// Every kind in display order. Histograms and charts follow this order.
    pub const ALL: [ShiftKind; ShiftKind::COUNT] = [
        ShiftKind::Morning,
        ShiftKind::Afternoon,
        ShiftKind::Night,
        ShiftKind::DayOff,
        ShiftKind::Leave,
    ];

    /// The three kinds shown as summary cards.
    pub const WORKING: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Night];

    /// Whether a day of this kind counts as a work day.
    pub fn is_work(self) -> bool {
        !matches!(self, ShiftKind::DayOff | ShiftKind::Leave)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "morning",
            ShiftKind::Afternoon => "afternoon",
            ShiftKind::Night => "night",
            ShiftKind::DayOff => "day_off",
            ShiftKind::Leave => "leave",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning shift",
            ShiftKind::Afternoon => "Afternoon shift",
            ShiftKind::Night => "Night shift",
            ShiftKind::DayOff => "Day off",
            ShiftKind::Leave => "Leave",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            ShiftKind::Morning => "🌞",
            ShiftKind::Afternoon => "🌇",
            ShiftKind::Night => "🌙",
            ShiftKind::DayOff => "🏖️",
            ShiftKind::Leave => "📅",
        }
    }

    /// Chart color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            ShiftKind::Morning => "#3b82f6",
            ShiftKind::Afternoon => "#f97316",
            ShiftKind::Night => "#9333ea",
            ShiftKind::DayOff | ShiftKind::Leave => "#383838",
        }
    }

    /// Position of this kind inside [`ShiftKind::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ShiftKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == key)
            .ok_or_else(|| ShiftError::UnknownKind(s.to_string()))
    }
}

/// A single date-tagged shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub date: NaiveDate,
    pub kind: ShiftKind,
}

impl ShiftRecord {
    pub fn new(date: NaiveDate, kind: ShiftKind) -> Self {
        ShiftRecord { date, kind }
    }

    /// Parses a record from its stored string form.
    pub fn parse(date: &str, kind: &str) -> Result<Self, ShiftError> {
        let date = parse_date(date)?;
        let kind = kind.parse()?;
        Ok(ShiftRecord { date, kind })
    }

    /// The record's date as an instant at local midnight.
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ShiftError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ShiftError::MalformedDate(value.to_string()))
}

/// Returns the record stored for `date`, if any.
pub fn find_by_date(records: &[ShiftRecord], date: NaiveDate) -> Option<&ShiftRecord> {
    records.iter().find(|record| record.date == date)
}

/// Replaces the shift stored for `date`.
///
/// Any existing record for the date is dropped and, when `choice` is
/// `Some`, the new record is appended. Relative order of the other
/// records is preserved.
pub fn apply_shift_choice(records: &[ShiftRecord], date: NaiveDate, choice: Option<ShiftKind>) -> Vec<ShiftRecord> {
    let mut updated: Vec<ShiftRecord> = records.iter().filter(|record| record.date != date).copied().collect();
    if let Some(kind) = choice {
        updated.push(ShiftRecord::new(date, kind));
    }
    updated
}

/// Like [`apply_shift_choice`], but choosing the kind already stored for
/// the date clears it.
pub fn toggle_shift(records: &[ShiftRecord], date: NaiveDate, kind: ShiftKind) -> Vec<ShiftRecord> {
    let current = find_by_date(records, date).map(|record| record.kind);
    let choice = if current == Some(kind) { None } else { Some(kind) };
    apply_shift_choice(records, date, choice)
}
