//! Configuration management for rental-ledger
//!
//! Config stored at: ~/.config/rental-ledger/config.json

use rental_domain::{LedgerPolicy, DEFAULT_PARKING_LOTS};
use rental_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Parking lots shown to staff (informational, not a fleet cap)
    #[serde(default = "default_parking_lots")]
    pub parking_lots: usize,

    /// Currency symbol used when printing prices
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Default output format for listings (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Directory for relative report file names
    #[serde(default)]
    pub report_dir: Option<PathBuf>,

    /// TOML file seeding the fleet at startup
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// Cancel a vehicle's reservations when it is deleted
    #[serde(default = "default_true")]
    pub cascade_vehicle_delete: bool,
}

fn default_parking_lots() -> usize {
    DEFAULT_PARKING_LOTS
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parking_lots: default_parking_lots(),
            currency_symbol: default_currency_symbol(),
            output_format: OutputFormat::default(),
            report_dir: None,
            fleet_file: None,
            cascade_vehicle_delete: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("rental-ledger");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Ledger policy derived from this config
    pub fn ledger_policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            parking_lots: self.parking_lots,
            cascade_vehicle_delete: self.cascade_vehicle_delete,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rental Ledger Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Parking lots:     {}", self.parking_lots)?;
        writeln!(f, "Currency symbol:  {}", self.currency_symbol)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(
            f,
            "Report dir:       {}",
            self.report_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(current directory)".to_string())
        )?;
        writeln!(
            f,
            "Fleet file:       {}",
            self.fleet_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Cascade delete:   {}", self.cascade_vehicle_delete)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
