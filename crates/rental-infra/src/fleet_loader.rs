//! Fleet seed data loaded from TOML
//!
//! ```toml
//! [[vehicles]]
//! registration = "ABC123"
//! make = "Toyota"
//! model = "Corolla"
//! daily_rate = "50.00"
//! vehicle_type = "car"
//! ```

use rental_domain::{FleetManager, Vehicle, VehicleType};
use rental_types::{ConfigError, Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One `[[vehicles]]` table of the seed file
#[derive(Debug, Clone, Deserialize)]
pub struct FleetSeedEntry {
    pub registration: String,
    pub make: String,
    pub model: String,
    pub daily_rate: Decimal,
    pub vehicle_type: VehicleType,
}

/// Container for parsing the seed file
#[derive(Debug, Deserialize)]
struct FleetSeedFile {
    #[serde(default)]
    vehicles: Vec<FleetSeedEntry>,
}

/// Validated vehicles read from a seed file, in file order
#[derive(Debug)]
pub struct FleetLoader {
    vehicles: Vec<Vehicle>,
}

impl FleetLoader {
    /// Load fleet seed data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file: {}",
                e
            )))
        })?;

        debug!(path = %path.display(), "loading fleet seed");
        Self::load_from_str(&content)
    }

    /// Load fleet seed data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let seed: FleetSeedFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet TOML: {}",
                e
            )))
        })?;

        let vehicles = seed
            .vehicles
            .into_iter()
            .map(|entry| {
                Vehicle::new(
                    entry.registration,
                    entry.make,
                    entry.model,
                    entry.daily_rate,
                    entry.vehicle_type,
                )
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Add every seeded vehicle to `fleet`; a duplicate registration aborts the seed
    pub fn seed_into<F: FleetManager + ?Sized>(self, fleet: &mut F) -> Result<usize> {
        let count = self.vehicles.len();
        for vehicle in self.vehicles {
            fleet.add_vehicle(vehicle)?;
        }
        Ok(count)
    }
}
