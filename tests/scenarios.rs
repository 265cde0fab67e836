#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftlog::libs::insights::{badge_message, empathy_messages};
    use shiftlog::libs::messages::Message;
    use shiftlog::libs::metrics::{
        calculate_consecutive_work_days, calculate_work_life_balance, count_afternoon_to_morning, ShiftMetrics,
        ShiftSummary,
    };
    use shiftlog::libs::period::Period;
    use shiftlog::libs::shift::{ShiftKind, ShiftRecord};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, kind: ShiftKind) -> ShiftRecord {
        ShiftRecord::new(date(y, m, d), kind)
    }

    /// A month of mixed shifts in scrambled order.
    fn month_of_shifts() -> Vec<ShiftRecord> {
        let pattern = [
            ShiftKind::Afternoon,
            ShiftKind::Morning,
            ShiftKind::Night,
            ShiftKind::Night,
            ShiftKind::DayOff,
            ShiftKind::Morning,
            ShiftKind::Leave,
        ];
        let mut records: Vec<ShiftRecord> = (1..=28)
            .map(|day| record(2024, 2, day, pattern[(day as usize * 5) % pattern.len()]))
            .collect();
        records.swap(0, 17);
        records.swap(3, 25);
        records.reverse();
        records
    }

    #[test]
    fn test_consecutive_mornings_then_afternoon() {
        let records = vec![
            record(2024, 1, 1, ShiftKind::Morning),
            record(2024, 1, 2, ShiftKind::Morning),
            record(2024, 1, 3, ShiftKind::Afternoon),
        ];
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 1, 3));

        assert_eq!(summary.metrics.consecutive_work_days, 3);
        assert_eq!(summary.metrics.afternoon_to_morning_count, 0);
        assert_eq!(
            summary.histogram.iter().collect::<Vec<_>>(),
            vec![
                (ShiftKind::Morning, 2),
                (ShiftKind::Afternoon, 1),
                (ShiftKind::Night, 0),
                (ShiftKind::DayOff, 0),
                (ShiftKind::Leave, 0),
            ]
        );
    }

    #[test]
    fn test_afternoon_followed_by_morning() {
        let records = vec![
            record(2024, 1, 1, ShiftKind::Afternoon),
            record(2024, 1, 2, ShiftKind::Morning),
        ];
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 1, 2));
        assert_eq!(summary.metrics.afternoon_to_morning_count, 1);
    }

    #[test]
    fn test_day_off_resets_streak() {
        let records = vec![
            record(2024, 1, 1, ShiftKind::DayOff),
            record(2024, 1, 2, ShiftKind::Morning),
        ];
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 1, 2));
        assert_eq!(summary.metrics.consecutive_work_days, 1);
    }

    #[test]
    fn test_empty_history_for_every_period() {
        for period in Period::ALL {
            let summary = ShiftSummary::derive(&[], period, midnight(2024, 6, 1));

            assert_eq!(summary.metrics, ShiftMetrics::default());
            assert_eq!(badge_message(&summary.metrics, 0), "no shifts recorded yet");
            assert_eq!(
                empathy_messages(&summary.metrics, &period.period_text(), 0),
                vec![Message::EmpathyThanks.to_string()]
            );
        }
    }

    #[test]
    fn test_half_night_shifts_is_severe() {
        let metrics = ShiftMetrics {
            work_life_balance: 50,
            consecutive_work_days: 0,
            afternoon_to_morning_count: 0,
            total_shifts: 10,
            night_shift_count: 5,
        };

        assert_eq!(badge_message(&metrics, 30), Message::BadgeTooManyNights.to_string());
        assert!(empathy_messages(&metrics, "In the last 30 days", 30).contains(&Message::EmpathyFrequentNights.to_string()));
    }

    #[test]
    fn test_histogram_sums_to_filtered_len() {
        let records = month_of_shifts();
        for period in Period::ALL {
            let summary = ShiftSummary::derive(&records, period, midnight(2024, 2, 28));
            assert_eq!(summary.histogram.total(), summary.filtered.len());
            assert_eq!(summary.metrics.total_shifts, summary.filtered.len());
        }
    }

    #[test]
    fn test_zero_length_window_balance_is_zero() {
        let now = midnight(2024, 1, 1);
        let records = vec![record(2024, 1, 1, ShiftKind::Morning)];
        assert_eq!(calculate_work_life_balance(&records, now, now), 0);

        // all-time window anchored on a single record dated now
        let summary = ShiftSummary::derive(&records, Period::All, now);
        assert_eq!(summary.metrics.work_life_balance, 0);
    }

    #[test]
    fn test_empty_filtered_set_has_no_streaks() {
        let records = vec![record(2023, 1, 1, ShiftKind::Morning)];
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 1, 1));
        assert!(summary.filtered.is_empty());
        assert_eq!(summary.metrics.consecutive_work_days, 0);
        assert_eq!(summary.metrics.afternoon_to_morning_count, 0);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let records = month_of_shifts();
        let now = midnight(2024, 2, 20);
        let first = ShiftSummary::derive(&records, Period::Month, now);
        let second = ShiftSummary::derive(&records, Period::Month, now);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sequence_aggregators_ignore_input_order() {
        let records = month_of_shifts();
        let mut sorted = records.clone();
        sorted.sort_by_key(|record| record.date);
        let mut rotated = sorted.clone();
        rotated.rotate_left(11);

        for variant in [&sorted, &rotated] {
            assert_eq!(
                calculate_consecutive_work_days(variant),
                calculate_consecutive_work_days(&records)
            );
            assert_eq!(count_afternoon_to_morning(variant), count_afternoon_to_morning(&records));
        }
    }

    #[test]
    fn test_badge_gates_on_recorded_total_not_window() {
        // Plenty of history, but the 7-day window is empty.
        let records: Vec<ShiftRecord> = (1..=20).map(|day| record(2024, 1, day, ShiftKind::Morning)).collect();
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 3, 1));

        assert_eq!(summary.metrics.total_shifts, 0);
        // balance is 0 with no records, which is severe
        assert_eq!(badge_message(&summary.metrics, records.len()), Message::BadgeUrgentRest.to_string());
    }

    #[test]
    fn test_empty_window_over_history_warns_about_balance() {
        let records: Vec<ShiftRecord> = (1..=20).map(|day| record(2024, 1, day, ShiftKind::Morning)).collect();
        let summary = ShiftSummary::derive(&records, Period::Week, midnight(2024, 3, 1));

        assert_eq!(
            empathy_messages(&summary.metrics, &Period::Week.period_text(), records.len()),
            vec![Message::EmpathyLowBalance(0).to_string()]
        );
    }
}
