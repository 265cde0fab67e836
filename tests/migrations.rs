#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use shiftlog::db::db::{Db, DB_FILE_NAME};
    use shiftlog::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join(DB_FILE_NAME);
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert_eq!(version, 2);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_connection_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_shifts", "create_transactions"]);

        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(!manager.is_migration_applied(&conn, 3).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_accepts_rows(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        db.conn
            .execute("INSERT INTO shifts (date, kind) VALUES ('2024-01-01', 'morning')", [])
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO transactions (type, amount, description, category, date) \
                 VALUES ('expense', 12.5, 'Tea', 'food', '2024-01-01 08:00:00')",
                [],
            )
            .unwrap();

        // date is the primary key of shifts
        assert!(db
            .conn
            .execute("INSERT INTO shifts (date, kind) VALUES ('2024-01-01', 'night')", [])
            .is_err());
    }
}
