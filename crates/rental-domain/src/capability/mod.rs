//! Capability traits for the two kinds of ledger users
//!
//! Staff manage the fleet through [`FleetManager`]; customers book through
//! [`RentalCustomer`]. Both are implemented by [`crate::Ledger`].

use std::io;

use rental_types::LedgerError;
use rust_decimal::Decimal;

use crate::model::{
    DriverDetails, Reservation, ReservationReceipt, Schedule, Vehicle, VehicleType,
};

/// A vehicle taken out of the fleet, plus any reservations cancelled with it
#[derive(Debug, Clone)]
pub struct RemovedVehicle {
    pub vehicle: Vehicle,
    pub cancelled: Vec<Reservation>,
}

/// Fleet management operations
pub trait FleetManager {
    /// Add a vehicle; its registration must not already be in the fleet
    fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), LedgerError>;

    /// Remove a vehicle by registration number
    fn delete_vehicle(&mut self, registration: &str) -> Result<RemovedVehicle, LedgerError>;

    /// All vehicles in insertion order
    fn list_vehicles(&self) -> Vec<&Vehicle>;

    /// All vehicles ordered by make
    fn list_ordered_vehicles(&self) -> Vec<&Vehicle>;

    /// Write the per-vehicle booking report to `sink`
    fn generate_report(&self, sink: &mut dyn io::Write) -> io::Result<()>;
}

/// Customer-facing booking operations
pub trait RentalCustomer {
    /// Vehicles of `vehicle_type` free for the whole of `schedule`
    fn list_available_vehicles(
        &self,
        schedule: &Schedule,
        vehicle_type: VehicleType,
    ) -> Vec<&Vehicle>;

    /// Check that a booking would be accepted and return its price, without booking
    fn quote_reservation(
        &self,
        registration: &str,
        schedule: &Schedule,
    ) -> Result<Decimal, LedgerError>;

    fn add_reservation(
        &mut self,
        registration: &str,
        schedule: Schedule,
        driver: DriverDetails,
    ) -> Result<ReservationReceipt, LedgerError>;

    /// Move the reservation at `old` to `new`, keeping its id and driver
    fn change_reservation(
        &mut self,
        registration: &str,
        old: &Schedule,
        new: Schedule,
    ) -> Result<ReservationReceipt, LedgerError>;

    fn delete_reservation(
        &mut self,
        registration: &str,
        schedule: &Schedule,
    ) -> Result<Reservation, LedgerError>;
}
