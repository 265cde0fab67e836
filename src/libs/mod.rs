pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod insights;
pub mod ledger;
pub mod messages;
pub mod metrics;
pub mod period;
pub mod shift;
pub mod view;
