#[cfg(test)]
mod tests {
    use shiftlog::libs::config::{Config, LedgerConfig, SummaryConfig, CONFIG_FILE_NAME};
    use shiftlog::libs::period::Period;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own config file location.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.default_period(), Period::Month);
        assert_eq!(config.ledger().currency_symbol, "฿");
        assert_eq!(config.ledger().report_days, 7);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            summary: Some(SummaryConfig {
                default_period: Period::Quarter,
            }),
            ledger: Some(LedgerConfig {
                currency_symbol: "€".to_string(),
                report_days: 30,
            }),
        };

        config.save_to(&ctx.config_path).unwrap();
        let loaded = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.default_period(), Period::Quarter);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_not_written(ctx: &mut ConfigTestContext) {
        let config = Config {
            summary: Some(SummaryConfig {
                default_period: Period::Month,
            }),
            ledger: None,
        };
        config.save_to(&ctx.config_path).unwrap();

        let raw = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert!(raw.contains("\"summary\""));
        assert!(!raw.contains("\"ledger\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }
}
