//! Vehicle record and vehicle type

use rental_types::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of vehicle offered for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VehicleType {
    Car,
    Van,
    ElectricCar,
    Motorbike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Car,
        VehicleType::Van,
        VehicleType::ElectricCar,
        VehicleType::Motorbike,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Car",
            VehicleType::Van => "Van",
            VehicleType::ElectricCar => "ElectricCar",
            VehicleType::Motorbike => "Motorbike",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive: "car", "CAR" and "Car" all parse to `Car`
impl FromStr for VehicleType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                LedgerError::InvalidVehicle(format!(
                    "unknown vehicle type '{}' (expected Car, Van, ElectricCar or Motorbike)",
                    wanted
                ))
            })
    }
}

impl TryFrom<String> for VehicleType {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleType> for String {
    fn from(value: VehicleType) -> Self {
        value.label().to_string()
    }
}

/// A rentable vehicle. Immutable once added to the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    registration: String,
    make: String,
    model: String,
    daily_rate: Decimal,
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a vehicle, rejecting an empty registration or a negative daily rate
    pub fn new(
        registration: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        daily_rate: Decimal,
        vehicle_type: VehicleType,
    ) -> Result<Self, LedgerError> {
        let registration = registration.into().trim().to_string();
        if registration.is_empty() {
            return Err(LedgerError::InvalidVehicle(
                "registration number must not be empty".to_string(),
            ));
        }
        if daily_rate.is_sign_negative() && !daily_rate.is_zero() {
            return Err(LedgerError::InvalidVehicle(format!(
                "daily rental price must not be negative (got {})",
                daily_rate
            )));
        }

        Ok(Self {
            registration,
            make: make.into(),
            model: model.into(),
            daily_rate,
            vehicle_type,
        })
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn daily_rate(&self) -> Decimal {
        self.daily_rate
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_parse_ignores_case() {
        assert_eq!("car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("VAN".parse::<VehicleType>().unwrap(), VehicleType::Van);
        assert_eq!(
            " electriccar ".parse::<VehicleType>().unwrap(),
            VehicleType::ElectricCar
        );
        assert_eq!(
            "MotorBike".parse::<VehicleType>().unwrap(),
            VehicleType::Motorbike
        );
        assert!("truck".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_vehicle_type_serde_uses_label() {
        let json = serde_json::to_string(&VehicleType::ElectricCar).unwrap();
        assert_eq!(json, "\"ElectricCar\"");
        let parsed: VehicleType = serde_json::from_str("\"motorbike\"").unwrap();
        assert_eq!(parsed, VehicleType::Motorbike);
    }

    #[test]
    fn test_new_vehicle_validation() {
        let ok = Vehicle::new(
            " ABC123 ",
            "Toyota",
            "Corolla",
            Decimal::new(5000, 2),
            VehicleType::Car,
        )
        .unwrap();
        assert_eq!(ok.registration(), "ABC123");
        assert_eq!(ok.daily_rate(), Decimal::new(50, 0));

        assert!(Vehicle::new("  ", "Toyota", "Corolla", Decimal::ONE, VehicleType::Car).is_err());
        assert!(
            Vehicle::new("X1", "Toyota", "Corolla", Decimal::new(-1, 0), VehicleType::Car).is_err()
        );
        assert!(Vehicle::new("X2", "Free", "Bike", Decimal::ZERO, VehicleType::Motorbike).is_ok());
    }
}
