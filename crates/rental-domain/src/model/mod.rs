//! Domain model types

pub mod reservation;
pub mod schedule;
pub mod vehicle;

pub use reservation::{DriverDetails, Reservation, ReservationId, ReservationReceipt};
pub use schedule::{format_date, format_timestamp, parse_date, Schedule, DATE_FORMAT};
pub use vehicle::{Vehicle, VehicleType};
