//! Rental domain - vehicles, schedules, reservations and the ledger that guards them

pub mod capability;
pub mod model;
pub mod service;

pub use capability::{FleetManager, RemovedVehicle, RentalCustomer};
pub use model::*;
pub use service::{format_currency, total_price, Ledger, LedgerPolicy, DEFAULT_PARKING_LOTS};
