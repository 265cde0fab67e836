#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftlog::db::db::DB_FILE_NAME;
    use shiftlog::db::error::StoreError;
    use shiftlog::db::shifts::Shifts;
    use shiftlog::libs::shift::{ShiftKind, ShiftRecord};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ShiftsTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for ShiftsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join(DB_FILE_NAME);
            ShiftsTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_fresh_store_is_empty(ctx: &mut ShiftsTestContext) {
        let shifts = Shifts::open(&ctx.db_path).unwrap();
        assert!(shifts.load_all().unwrap().is_empty());
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_replace_all_keeps_write_order(ctx: &mut ShiftsTestContext) {
        let mut shifts = Shifts::open(&ctx.db_path).unwrap();
        let records = vec![
            ShiftRecord::new(date(9), ShiftKind::Night),
            ShiftRecord::new(date(1), ShiftKind::Morning),
            ShiftRecord::new(date(4), ShiftKind::Leave),
        ];

        shifts.replace_all(&records).unwrap();
        assert_eq!(shifts.load_all().unwrap(), records);

        // A shorter sequence replaces, never merges.
        shifts.replace_all(&records[1..2]).unwrap();
        assert_eq!(shifts.load_all().unwrap(), vec![records[1]]);
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_duplicate_dates_are_rejected(ctx: &mut ShiftsTestContext) {
        let mut shifts = Shifts::open(&ctx.db_path).unwrap();
        let existing = vec![ShiftRecord::new(date(2), ShiftKind::DayOff)];
        shifts.replace_all(&existing).unwrap();

        let result = shifts.replace_all(&[
            ShiftRecord::new(date(3), ShiftKind::Morning),
            ShiftRecord::new(date(3), ShiftKind::Night),
        ]);

        assert!(matches!(result, Err(StoreError::DuplicateDate(ref d)) if d == "2024-05-03"));
        assert_eq!(shifts.load_all().unwrap(), existing);
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_set_replaces_and_clears(ctx: &mut ShiftsTestContext) {
        let mut shifts = Shifts::open(&ctx.db_path).unwrap();

        shifts.set(date(6), Some(ShiftKind::Morning)).unwrap();
        let updated = shifts.set(date(6), Some(ShiftKind::Afternoon)).unwrap();
        assert_eq!(updated, vec![ShiftRecord::new(date(6), ShiftKind::Afternoon)]);

        // Setting the same value twice changes nothing.
        let again = shifts.set(date(6), Some(ShiftKind::Afternoon)).unwrap();
        assert_eq!(again, updated);

        let cleared = shifts.set(date(6), None).unwrap();
        assert!(cleared.is_empty());
        assert!(shifts.load_all().unwrap().is_empty());
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_toggle_same_kind_clears(ctx: &mut ShiftsTestContext) {
        let mut shifts = Shifts::open(&ctx.db_path).unwrap();

        let recorded = shifts.toggle(date(10), ShiftKind::Night).unwrap();
        assert_eq!(recorded, vec![ShiftRecord::new(date(10), ShiftKind::Night)]);

        let switched = shifts.toggle(date(10), ShiftKind::Morning).unwrap();
        assert_eq!(switched, vec![ShiftRecord::new(date(10), ShiftKind::Morning)]);

        let cleared = shifts.toggle(date(10), ShiftKind::Morning).unwrap();
        assert!(cleared.is_empty());
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_malformed_row_fails_load(ctx: &mut ShiftsTestContext) {
        // Opening once creates the schema.
        drop(Shifts::open(&ctx.db_path).unwrap());
        let conn = rusqlite::Connection::open(&ctx.db_path).unwrap();
        conn.execute("INSERT INTO shifts (date, kind) VALUES ('2024-05-01', 'siesta')", [])
            .unwrap();
        drop(conn);

        let shifts = Shifts::open(&ctx.db_path).unwrap();
        assert!(matches!(shifts.load_all(), Err(StoreError::MalformedRecord(_))));
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_unreadable_calendar_is_not_overwritten(ctx: &mut ShiftsTestContext) {
        drop(Shifts::open(&ctx.db_path).unwrap());
        let conn = rusqlite::Connection::open(&ctx.db_path).unwrap();
        conn.execute("INSERT INTO shifts (date, kind) VALUES ('2024-05-01', 'siesta')", [])
            .unwrap();

        let mut shifts = Shifts::open(&ctx.db_path).unwrap();
        assert!(matches!(
            shifts.set(date(2), Some(ShiftKind::Morning)),
            Err(StoreError::MalformedRecord(_))
        ));
        assert!(matches!(
            shifts.toggle(date(2), ShiftKind::Night),
            Err(StoreError::MalformedRecord(_))
        ));

        let rows: i64 = conn.query_row("SELECT COUNT(*) FROM shifts", [], |row| row.get(0)).unwrap();
        assert_eq!(rows, 1);
    }

    #[test_context(ShiftsTestContext)]
    #[test]
    fn test_records_persist_across_reopen(ctx: &mut ShiftsTestContext) {
        let records = vec![
            ShiftRecord::new(date(20), ShiftKind::Afternoon),
            ShiftRecord::new(date(21), ShiftKind::Morning),
        ];
        {
            let mut shifts = Shifts::open(&ctx.db_path).unwrap();
            shifts.replace_all(&records).unwrap();
        }

        let reopened = Shifts::open(&ctx.db_path).unwrap();
        assert_eq!(reopened.load_all().unwrap(), records);
    }
}
