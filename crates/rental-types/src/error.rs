//! Error types for rental-ledger

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Business-rule violations reported by the ledger.
///
/// These never abort a session: the caller shows the message and may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Duplicate registration number {0}. Vehicle not added.")]
    DuplicateRegistration(String),

    #[error("Vehicle with registration number {0} not found.")]
    VehicleNotFound(String),

    #[error("Schedule overlaps with an existing booking for vehicle {0}.")]
    ScheduleOverlap(String),

    #[error("Reservation not found for vehicle {0} and the specified schedule.")]
    ReservationNotFound(String),

    #[error("Invalid schedule: pickup {pickup} must be before dropoff {dropoff}.")]
    InvalidSchedule { pickup: String, dropoff: String },

    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("Failed to write report to {path}: {source}")]
    Report {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
