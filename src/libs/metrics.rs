//! Shift analytics derived from a snapshot of shift records.
//!
//! Every function here is pure: it takes the records and the analysis
//! window explicitly and returns freshly computed values. The current time
//! is always passed in by the caller.
//!
//! ## Pipeline
//!
//! ```text
//! records ──▶ compute_start_date ──▶ filter_records ──┬──▶ count_shift_kinds
//!                                                    ├──▶ calculate_work_life_balance
//!                                                    ├──▶ calculate_consecutive_work_days
//!                                                    └──▶ count_afternoon_to_morning
//! ```
//!
//! ## Work-life balance
//!
//! ```text
//! total_days = ceil((end - start) / 1 day)
//! work_days  = filtered records that are not a day off or leave
//! balance    = round((total_days - work_days) / total_days * 100)
//! ```
//!
//! The balance is not clamped: sparse windows can exceed 100 and windows
//! with more work records than days go negative.

use crate::libs::period::{compute_start_date, Period};
use crate::libs::shift::{ShiftKind, ShiftRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Keeps the records dated inside `[start, end]`, preserving input order.
pub fn filter_records(records: &[ShiftRecord], start: NaiveDateTime, end: NaiveDateTime) -> Vec<ShiftRecord> {
    records
        .iter()
        .filter(|record| {
            let instant = record.instant();
            instant >= start && instant <= end
        })
        .copied()
        .collect()
}

/// Occurrence count per shift kind. Always holds all five kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftHistogram {
    counts: [usize; ShiftKind::COUNT],
}

/// One bar (or pie slice) of the shift chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDataPoint {
    pub kind: ShiftKind,
    pub count: usize,
}

impl ShiftHistogram {
    pub fn get(&self, kind: ShiftKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShiftKind, usize)> + '_ {
        ShiftKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn chart_data(&self) -> Vec<ShiftDataPoint> {
        self.iter().map(|(kind, count)| ShiftDataPoint { kind, count }).collect()
    }
}

/// Counts each shift kind in `records`.
pub fn count_shift_kinds(records: &[ShiftRecord]) -> ShiftHistogram {
    let mut histogram = ShiftHistogram::default();
    for record in records {
        histogram.counts[record.kind.index()] += 1;
    }
    histogram
}

/// Percentage of the window made of non-work days. See the module docs.
///
/// Returns 0 for an empty record set and for windows shorter than one
/// second (no division by zero).
pub fn calculate_work_life_balance(records: &[ShiftRecord], start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    if records.is_empty() {
        return 0;
    }

    let seconds = (end - start).num_seconds();
    let total_days = ceil_div(seconds, SECONDS_PER_DAY);
    if total_days <= 0 {
        return 0;
    }

    let work_days = records.iter().filter(|record| record.kind.is_work()).count() as i64;
    let ratio = (total_days - work_days) as f64 / total_days as f64;
    round_half_up(ratio * 100.0)
}

/// Longest run of calendar-adjacent work days.
///
/// Records are sorted by date first. A day off or leave ends the run and
/// clears the anchor, so the next work day starts a fresh run of one.
pub fn calculate_consecutive_work_days(records: &[ShiftRecord]) -> usize {
    let mut max_streak = 0;
    let mut streak = 0;
    let mut previous: Option<NaiveDate> = None;

    for record in sorted_by_date(records) {
        if !record.kind.is_work() {
            streak = 0;
            previous = None;
            continue;
        }

        streak = match previous {
            Some(prev) if (record.date - prev).num_days() == 1 => streak + 1,
            _ => 1,
        };
        max_streak = max_streak.max(streak);
        previous = Some(record.date);
    }

    max_streak
}

/// Counts afternoon shifts directly followed, in date order, by a morning shift.
///
/// Adjacency is by position in the sorted sequence, so a gap of several
/// unrecorded days between the two still counts.
pub fn count_afternoon_to_morning(records: &[ShiftRecord]) -> usize {
    sorted_by_date(records)
        .windows(2)
        .filter(|pair| pair[0].kind == ShiftKind::Afternoon && pair[1].kind == ShiftKind::Morning)
        .count()
}

/// Aggregate metrics for one analysis window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftMetrics {
    pub work_life_balance: i64,
    pub consecutive_work_days: usize,
    pub afternoon_to_morning_count: usize,
    pub total_shifts: usize,
    pub night_shift_count: usize,
}

/// Everything the summary view needs for one period.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSummary {
    pub period: Period,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub filtered: Vec<ShiftRecord>,
    pub histogram: ShiftHistogram,
    pub metrics: ShiftMetrics,
}

impl ShiftSummary {
    /// Runs the full derivation for `period` ending at `now`.
    pub fn derive(records: &[ShiftRecord], period: Period, now: NaiveDateTime) -> Self {
        let start = compute_start_date(period, records, now);
        let filtered = filter_records(records, start, now);
        let histogram = count_shift_kinds(&filtered);

        let metrics = ShiftMetrics {
            work_life_balance: calculate_work_life_balance(&filtered, start, now),
            consecutive_work_days: calculate_consecutive_work_days(&filtered),
            afternoon_to_morning_count: count_afternoon_to_morning(&filtered),
            total_shifts: filtered.len(),
            night_shift_count: histogram.get(ShiftKind::Night),
        };

        tracing::debug!(
            period = %period,
            records = records.len(),
            filtered = filtered.len(),
            balance = metrics.work_life_balance,
            "derived shift summary"
        );

        ShiftSummary {
            period,
            start,
            end: now,
            filtered,
            histogram,
            metrics,
        }
    }
}

fn sorted_by_date(records: &[ShiftRecord]) -> Vec<ShiftRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.date);
    sorted
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Rounds halves towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
