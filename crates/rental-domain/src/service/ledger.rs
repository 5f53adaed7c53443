//! The rental ledger: fleet inventory plus reservations
//!
//! Every mutation either applies completely or returns a [`LedgerError`] and
//! leaves both collections untouched.

use std::io;

use rental_types::LedgerError;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::capability::{FleetManager, RemovedVehicle, RentalCustomer};
use crate::model::{
    format_timestamp, DriverDetails, Reservation, ReservationReceipt, Schedule, Vehicle,
    VehicleType,
};
use crate::service::pricing::total_price;

/// Parking lots shown to staff when adding or deleting vehicles
pub const DEFAULT_PARKING_LOTS: usize = 50;

/// Tunables for ledger behaviour that is a policy choice rather than an invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerPolicy {
    /// Informational lot count; adding vehicles beyond it is still allowed
    pub parking_lots: usize,
    /// Cancel a vehicle's reservations when the vehicle is deleted
    pub cascade_vehicle_delete: bool,
}

impl Default for LedgerPolicy {
    fn default() -> Self {
        Self {
            parking_lots: DEFAULT_PARKING_LOTS,
            cascade_vehicle_delete: true,
        }
    }
}

/// In-memory owner of the fleet and its reservations
#[derive(Debug, Default)]
pub struct Ledger {
    policy: LedgerPolicy,
    vehicles: Vec<Vehicle>,
    reservations: Vec<Reservation>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: LedgerPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    pub fn fleet_size(&self) -> usize {
        self.vehicles.len()
    }

    pub fn available_parking_lots(&self) -> usize {
        self.policy.parking_lots.saturating_sub(self.vehicles.len())
    }

    /// Look up a vehicle by registration number
    pub fn vehicle(&self, registration: &str) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.registration() == registration)
    }

    /// All reservations in booking order
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Reservations of one vehicle, earliest pickup first
    pub fn reservations_for(&self, registration: &str) -> Vec<&Reservation> {
        let mut bookings: Vec<_> = self
            .reservations
            .iter()
            .filter(|r| r.registration == registration)
            .collect();
        bookings.sort_by_key(|r| r.schedule.pickup());
        bookings
    }

    /// True when no reservation of `vehicle` overlaps `schedule`
    pub fn is_vehicle_available(&self, vehicle: &Vehicle, schedule: &Schedule) -> bool {
        self.find_conflict(vehicle.registration(), schedule, None)
            .is_none()
    }

    fn require_vehicle(&self, registration: &str) -> Result<&Vehicle, LedgerError> {
        self.vehicle(registration).ok_or_else(|| {
            debug!(registration, "vehicle not found");
            LedgerError::VehicleNotFound(registration.to_string())
        })
    }

    /// First reservation of the vehicle overlapping `schedule`, skipping the one at `excluding`
    fn find_conflict(
        &self,
        registration: &str,
        schedule: &Schedule,
        excluding: Option<&Schedule>,
    ) -> Option<&Reservation> {
        self.reservations.iter().find(|r| {
            r.registration == registration
                && excluding.map_or(true, |old| r.schedule != *old)
                && r.schedule.overlaps(schedule)
        })
    }

    fn position_of(&self, registration: &str, schedule: &Schedule) -> Option<usize> {
        self.reservations
            .iter()
            .position(|r| r.matches(registration, schedule))
    }

    fn reject_overlap(
        &self,
        registration: &str,
        schedule: &Schedule,
        excluding: Option<&Schedule>,
    ) -> Result<(), LedgerError> {
        match self.find_conflict(registration, schedule, excluding) {
            Some(existing) => {
                debug!(
                    registration,
                    wanted = %schedule,
                    existing = %existing.schedule,
                    "schedule overlaps existing booking"
                );
                Err(LedgerError::ScheduleOverlap(registration.to_string()))
            }
            None => Ok(()),
        }
    }
}

impl FleetManager for Ledger {
    fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), LedgerError> {
        if self.vehicle(vehicle.registration()).is_some() {
            debug!(registration = vehicle.registration(), "duplicate registration");
            return Err(LedgerError::DuplicateRegistration(
                vehicle.registration().to_string(),
            ));
        }

        // Leftovers of a deleted vehicle with this registration never carry over
        let before = self.reservations.len();
        self.reservations
            .retain(|r| r.registration != vehicle.registration());
        let discarded = before - self.reservations.len();

        info!(
            registration = vehicle.registration(),
            vehicle_type = %vehicle.vehicle_type(),
            discarded,
            "vehicle added"
        );
        self.vehicles.push(vehicle);
        Ok(())
    }

    fn delete_vehicle(&mut self, registration: &str) -> Result<RemovedVehicle, LedgerError> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.registration() == registration)
            .ok_or_else(|| LedgerError::VehicleNotFound(registration.to_string()))?;
        let vehicle = self.vehicles.remove(index);

        let cancelled = if self.policy.cascade_vehicle_delete {
            let (cancelled, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.reservations)
                .into_iter()
                .partition(|r| r.registration == registration);
            self.reservations = kept;
            cancelled
        } else {
            Vec::new()
        };

        info!(registration, cancelled = cancelled.len(), "vehicle deleted");
        Ok(RemovedVehicle { vehicle, cancelled })
    }

    fn list_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles.iter().collect()
    }

    fn list_ordered_vehicles(&self) -> Vec<&Vehicle> {
        let mut vehicles = self.list_vehicles();
        vehicles.sort_by(|a, b| a.make().cmp(b.make()));
        vehicles
    }

    fn generate_report(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        for vehicle in &self.vehicles {
            writeln!(
                sink,
                "Vehicle Information - Registration Number: {}, Make: {}, Model: {}",
                vehicle.registration(),
                vehicle.make(),
                vehicle.model()
            )?;

            for booking in self.reservations_for(vehicle.registration()) {
                writeln!(
                    sink,
                    "  Booking Details - Pickup Date: {}, Dropoff Date: {}",
                    format_timestamp(booking.schedule.pickup()),
                    format_timestamp(booking.schedule.dropoff())
                )?;
                writeln!(sink, "    Driver Details - {}", booking.driver)?;
            }

            writeln!(sink)?;
        }
        sink.flush()
    }
}

impl RentalCustomer for Ledger {
    fn list_available_vehicles(
        &self,
        schedule: &Schedule,
        vehicle_type: VehicleType,
    ) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.vehicle_type() == vehicle_type && self.is_vehicle_available(v, schedule))
            .collect()
    }

    fn quote_reservation(
        &self,
        registration: &str,
        schedule: &Schedule,
    ) -> Result<Decimal, LedgerError> {
        let daily_rate = self.require_vehicle(registration)?.daily_rate();
        self.reject_overlap(registration, schedule, None)?;
        Ok(total_price(daily_rate, schedule))
    }

    fn add_reservation(
        &mut self,
        registration: &str,
        schedule: Schedule,
        driver: DriverDetails,
    ) -> Result<ReservationReceipt, LedgerError> {
        let total_price = self.quote_reservation(registration, &schedule)?;
        let reservation = Reservation::new(registration, schedule, driver);

        info!(
            registration,
            id = %reservation.id,
            schedule = %schedule,
            total = %total_price,
            "reservation added"
        );
        self.reservations.push(reservation.clone());
        Ok(ReservationReceipt {
            reservation,
            total_price,
        })
    }

    fn change_reservation(
        &mut self,
        registration: &str,
        old: &Schedule,
        new: Schedule,
    ) -> Result<ReservationReceipt, LedgerError> {
        let daily_rate = self.require_vehicle(registration)?.daily_rate();
        self.reject_overlap(registration, &new, Some(old))?;
        let index = self
            .position_of(registration, old)
            .ok_or_else(|| LedgerError::ReservationNotFound(registration.to_string()))?;

        let mut reservation = self.reservations.remove(index);
        reservation.schedule = new;
        self.reservations.push(reservation.clone());

        info!(registration, id = %reservation.id, from = %old, to = %new, "reservation changed");
        Ok(ReservationReceipt {
            total_price: total_price(daily_rate, &new),
            reservation,
        })
    }

    fn delete_reservation(
        &mut self,
        registration: &str,
        schedule: &Schedule,
    ) -> Result<Reservation, LedgerError> {
        self.require_vehicle(registration)?;
        let index = self
            .position_of(registration, schedule)
            .ok_or_else(|| LedgerError::ReservationNotFound(registration.to_string()))?;

        let reservation = self.reservations.remove(index);
        info!(registration, id = %reservation.id, "reservation deleted");
        Ok(reservation)
    }
}
