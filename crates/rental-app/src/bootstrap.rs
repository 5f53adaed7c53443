//! Ledger construction from configuration

use std::path::{Path, PathBuf};

use rental_domain::Ledger;
use rental_infra::FleetLoader;
use rental_types::Result;
use tracing::info;

use crate::config::Config;

/// Open an empty ledger with the configured policy, seeded from the fleet file if any.
///
/// `fleet_override` takes precedence over `config.fleet_file`.
pub fn open_ledger(config: &Config, fleet_override: Option<&Path>) -> Result<Ledger> {
    let mut ledger = Ledger::with_policy(config.ledger_policy());

    let fleet_file = fleet_override.or(config.fleet_file.as_deref());
    if let Some(path) = fleet_file {
        let seeded = FleetLoader::load_from_file(path)?.seed_into(&mut ledger)?;
        info!(path = %path.display(), seeded, "fleet seeded");
    }

    Ok(ledger)
}

/// Resolve a report file name: absolute paths are kept, relative ones go under `report_dir`
pub fn resolve_report_path(config: &Config, file_name: &str) -> PathBuf {
    let path = PathBuf::from(file_name.trim());
    match &config.report_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_domain::FleetManager;
    use rental_types::Error;
    use tempfile::tempdir;

    const FLEET: &str = r#"
[[vehicles]]
registration = "ABC123"
make = "Toyota"
model = "Corolla"
daily_rate = "50"
vehicle_type = "car"
"#;

    #[test]
    fn test_open_without_fleet_is_empty() {
        let ledger = open_ledger(&Config::default(), None).unwrap();
        assert_eq!(ledger.fleet_size(), 0);
        assert_eq!(ledger.available_parking_lots(), 50);
    }

    #[test]
    fn test_open_with_configured_fleet() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fleet.toml");
        std::fs::write(&path, FLEET).unwrap();

        let config = Config {
            fleet_file: Some(path),
            parking_lots: 10,
            ..Config::default()
        };
        let ledger = open_ledger(&config, None).unwrap();
        assert_eq!(ledger.list_vehicles()[0].registration(), "ABC123");
        assert_eq!(ledger.available_parking_lots(), 9);
    }

    #[test]
    fn test_override_wins_over_config() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fleet.toml");
        std::fs::write(&path, FLEET).unwrap();

        let config = Config {
            fleet_file: Some(dir.path().join("does-not-exist.toml")),
            ..Config::default()
        };
        assert!(matches!(
            open_ledger(&config, None),
            Err(Error::FileNotFound(_))
        ));
        assert_eq!(open_ledger(&config, Some(&path)).unwrap().fleet_size(), 1);
    }

    #[test]
    fn test_resolve_report_path() {
        let mut config = Config::default();
        assert_eq!(resolve_report_path(&config, " out.txt "), PathBuf::from("out.txt"));

        config.report_dir = Some(PathBuf::from("/var/reports"));
        assert_eq!(
            resolve_report_path(&config, "out.txt"),
            PathBuf::from("/var/reports/out.txt")
        );
        assert_eq!(
            resolve_report_path(&config, "/tmp/out.txt"),
            PathBuf::from("/tmp/out.txt")
        );
    }
}
