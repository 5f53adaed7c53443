//! Application service layer - configuration and ledger bootstrap

pub mod bootstrap;
pub mod config;

pub use bootstrap::{open_ledger, resolve_report_path};
pub use config::Config;
