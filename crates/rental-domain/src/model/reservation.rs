//! Reservation records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::schedule::{format_date, Schedule};

/// Stable identifier of a reservation; kept across schedule changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who is driving. Not validated beyond the date of birth being a real date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverDetails {
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub license_number: String,
}

impl std::fmt::Display for DriverDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, DOB: {}, License: {}",
            self.name,
            self.surname,
            format_date(self.date_of_birth),
            self.license_number
        )
    }
}

/// A booking of one vehicle for one schedule by one driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub registration: String,
    pub schedule: Schedule,
    pub driver: DriverDetails,
}

impl Reservation {
    pub fn new(registration: impl Into<String>, schedule: Schedule, driver: DriverDetails) -> Self {
        Self {
            id: ReservationId::new(),
            registration: registration.into(),
            schedule,
            driver,
        }
    }

    /// True when this reservation is for `registration` at exactly `schedule`
    pub fn matches(&self, registration: &str, schedule: &Schedule) -> bool {
        self.registration == registration && self.schedule == *schedule
    }
}

/// Outcome of a successful add or change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationReceipt {
    pub reservation: Reservation,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_details_render_as_single_line() {
        let driver = DriverDetails {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
            license_number: "LOV-1815".to_string(),
        };
        assert_eq!(
            driver.to_string(),
            "Ada Lovelace, DOB: 12/10/1990, License: LOV-1815"
        );
    }

    #[test]
    fn test_reservation_ids_are_unique() {
        assert_ne!(ReservationId::new(), ReservationId::new());
    }
}
