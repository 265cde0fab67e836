//! User configuration stored as JSON next to the database.
//!
//! Every section is optional; a missing section means "use the defaults".
//! The file lives at `<data dir>/config.json`:
//!
//! ```json
//! {
//!   "summary": { "default_period": "30" },
//!   "ledger": { "currency_symbol": "฿", "report_days": 7 }
//! }
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::period::Period;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Report lengths offered by the ledger report.
pub const REPORT_DAY_CHOICES: [u32; 3] = [7, 15, 30];

/// A section shown by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SummaryConfig {
    /// Window used when `summary` runs without `--period`.
    #[serde(default)]
    pub default_period: Period,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    pub currency_symbol: String,
    pub report_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            currency_symbol: "฿".to_string(),
            report_days: 7,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Loads the config from the data directory, or the defaults if none was saved.
    pub fn read() -> Result<Config> {
        Self::read_from(Self::path()?)
    }

    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved config file, if any.
    pub fn delete() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn default_period(&self) -> Period {
        self.summary.as_ref().map(|summary| summary.default_period).unwrap_or_default()
    }

    pub fn ledger(&self) -> LedgerConfig {
        self.ledger.clone().unwrap_or_default()
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "summary".to_string(),
                name: Message::ConfigModuleSummary.to_string(),
            },
            ConfigModule {
                key: "ledger".to_string(),
                name: Message::ConfigModuleLedger.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "summary" => {
                    let default = config.summary.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSummary);
                    let position = Period::ALL.iter().position(|p| *p == default.default_period).unwrap_or(1);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPeriod.to_string())
                        .items(&Period::ALL.iter().map(|p| p.label()).collect::<Vec<_>>())
                        .default(position)
                        .interact()?;
                    config.summary = Some(SummaryConfig {
                        default_period: Period::ALL[choice],
                    });
                }
                "ledger" => {
                    let default = config.ledger.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleLedger);
                    let position = REPORT_DAY_CHOICES.iter().position(|d| *d == default.report_days).unwrap_or(0);
                    config.ledger = Some(LedgerConfig {
                        currency_symbol: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCurrencySymbol.to_string())
                            .default(default.currency_symbol)
                            .interact_text()?,
                        report_days: REPORT_DAY_CHOICES[Select::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptReportDays.to_string())
                            .items(&REPORT_DAY_CHOICES[..])
                            .default(position)
                            .interact()?],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
