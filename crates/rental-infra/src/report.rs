//! Plain-text fleet report written to a file

use rental_domain::FleetManager;
use rental_types::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// Write the fleet report to `path`, replacing any existing file.
///
/// Failing to create or write the file is returned as [`Error::Report`].
pub fn write_report_file<F: FleetManager + ?Sized>(fleet: &F, path: &Path) -> Result<()> {
    let to_report_error = |source| Error::Report {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(to_report_error)?;
    let mut writer = BufWriter::new(file);
    fleet.generate_report(&mut writer).map_err(to_report_error)?;

    info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_domain::{Ledger, Vehicle, VehicleType};
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add_vehicle(
                Vehicle::new("ABC123", "Toyota", "Corolla", Decimal::new(50, 0), VehicleType::Car)
                    .unwrap(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_writes_report_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("report.txt");

        write_report_file(&ledger(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Vehicle Information - Registration Number: ABC123, Make: Toyota, Model: Corolla\n\n"
        );
    }

    #[test]
    fn test_unwritable_destination_is_report_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("report.txt");

        let err = write_report_file(&ledger(), &path).unwrap_err();
        assert!(matches!(err, Error::Report { .. }));
        assert!(err.to_string().contains("report.txt"));
    }
}
