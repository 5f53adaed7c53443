//! Infrastructure layer
//!
//! File-backed collaborators of the ledger: the report writer and the TOML
//! fleet seed loader.

pub mod fleet_loader;
pub mod report;

pub use fleet_loader::{FleetLoader, FleetSeedEntry};
pub use report::write_report_file;
