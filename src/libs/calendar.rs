//! Monday-first weekly calendar over recorded shifts.

use crate::libs::shift::{find_by_date, ShiftKind, ShiftRecord};
use chrono::{Datelike, Duration, NaiveDate};

/// Short weekday headers, Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub shift: Option<ShiftKind>,
}

/// Seven consecutive days starting on a Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWeek {
    pub start: NaiveDate,
    pub days: [CalendarDay; 7],
}

impl CalendarWeek {
    /// Builds the week containing `date`, filling in each day's shift.
    pub fn build(date: NaiveDate, records: &[ShiftRecord]) -> Self {
        let start = week_start(date);
        let days = std::array::from_fn(|offset| {
            let date = start + Duration::days(offset as i64);
            CalendarDay {
                date,
                shift: find_by_date(records, date).map(|record| record.kind),
            }
        });
        CalendarWeek { start, days }
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    pub fn previous(&self, records: &[ShiftRecord]) -> Self {
        CalendarWeek::build(self.start - Duration::days(7), records)
    }

    pub fn next(&self, records: &[ShiftRecord]) -> Self {
        CalendarWeek::build(self.start + Duration::days(7), records)
    }

    /// Shifts the week by `offset` whole weeks.
    pub fn offset(&self, offset: i64, records: &[ShiftRecord]) -> Self {
        CalendarWeek::build(self.start + Duration::weeks(offset), records)
    }
}

/// Black or white text for a `#rrggbb` background, by relative luminance.
pub fn text_color(background: &str) -> &'static str {
    let hex = background.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|part| u8::from_str_radix(part, 16).ok())
            .unwrap_or(0) as f64
    };
    let luminance = (0.299 * channel(0..2) + 0.587 * channel(2..4) + 0.114 * channel(4..6)) / 255.0;
    if luminance > 0.5 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-07 is a Sunday
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 1)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 3)), date(2024, 1, 1));
    }

    #[test]
    fn test_build_fills_recorded_days() {
        let records = vec![
            ShiftRecord::new(date(2024, 1, 2), ShiftKind::Night),
            ShiftRecord::new(date(2024, 1, 8), ShiftKind::Morning),
        ];
        let week = CalendarWeek::build(date(2024, 1, 4), &records);
        assert_eq!(week.start, date(2024, 1, 1));
        assert_eq!(week.end(), date(2024, 1, 7));
        assert_eq!(week.days[1].shift, Some(ShiftKind::Night));
        assert_eq!(week.days.iter().filter(|day| day.shift.is_some()).count(), 1);

        let next = week.next(&records);
        assert_eq!(next.days[0].shift, Some(ShiftKind::Morning));
        assert_eq!(next.previous(&records), week);
    }

    #[test]
    fn test_contains_and_offset() {
        let week = CalendarWeek::build(date(2024, 2, 28), &[]);
        assert!(week.contains(date(2024, 3, 3)));
        assert!(!week.contains(date(2024, 3, 4)));
        assert_eq!(week.offset(-2, &[]).start, date(2024, 2, 12));
    }

    #[test]
    fn test_text_color() {
        assert_eq!(text_color(ShiftKind::Morning.color()), "#FFFFFF");
        assert_eq!(text_color("#f3f4f6"), "#000000");
    }
}
