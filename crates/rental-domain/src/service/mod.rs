//! Domain services

pub mod ledger;
pub mod pricing;

pub use ledger::{Ledger, LedgerPolicy, DEFAULT_PARKING_LOTS};
pub use pricing::{format_currency, total_price};
