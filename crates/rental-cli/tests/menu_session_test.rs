//! Scripted interactive sessions against the menu front end

use rental_app::Config;
use rental_cli::menu::Session;
use rental_domain::{FleetManager, Ledger, RentalCustomer, Schedule, Vehicle, VehicleType};
use rust_decimal::Decimal;
use tempfile::tempdir;

use chrono::NaiveDate;

fn run_script(ledger: Ledger, config: Config, lines: &[&str]) -> (Ledger, String) {
    let script = lines.join("\n") + "\n";
    let mut out = Vec::new();

    let mut session = Session::new(script.as_bytes(), &mut out, ledger, config);
    session.run().expect("session should end cleanly");
    let ledger = session.into_ledger();

    (ledger, String::from_utf8(out).expect("output is utf-8"))
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn span(from: u32, to: u32) -> Schedule {
    Schedule::from_dates(jan(from), jan(to)).unwrap()
}

fn seeded_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .add_vehicle(
            Vehicle::new("ABC123", "Toyota", "Corolla", Decimal::new(50, 0), VehicleType::Car)
                .unwrap(),
        )
        .unwrap();
    ledger
}

const DRIVER: [&str; 4] = ["Jane", "Doe", "05/17/1990", "D1234567"];

#[test]
fn test_full_booking_session() {
    let mut lines = vec![
        // Admin: add two vehicles and a duplicate
        "2", "1", "ABC123", "Toyota", "Corolla", "50", "car",
        "1", "ABC123", "Honda", "Civic", "40", "Car",
        "1", "VAN001", "Ford", "Transit", "80.50", "van",
        "6",
        // Customer: book Jan 1-5
        "1", "2", "ABC123", "01/01/2024", "01/05/2024",
    ];
    lines.extend(DRIVER);
    // Overlapping Jan 3-7 is refused before driver details are asked
    lines.extend(["2", "ABC123", "01/03/2024", "01/07/2024"]);
    // Touching Jan 5-10 is accepted
    lines.extend(["2", "ABC123", "01/05/2024", "01/10/2024"]);
    lines.extend(DRIVER);
    lines.extend([
        "1", "01/02/2024 - 01/04/2024", "Car",
        "1", "01/02/2024 - 01/04/2024", "VAN",
        "5", "3",
    ]);

    let (ledger, output) = run_script(Ledger::new(), Config::default(), &lines);

    assert!(output.contains("Vehicle ABC123 added. Available parking lots: 49"));
    assert!(output.contains("Duplicate registration number ABC123. Vehicle not added."));
    assert!(output.contains("Vehicle VAN001 added. Available parking lots: 48"));
    assert!(output.contains("Reservation added successfully. Total price: $200.00"));
    assert!(output.contains("Schedule overlaps with an existing booking for vehicle ABC123."));
    assert!(output.contains("Reservation added successfully. Total price: $250.00"));
    assert!(output.contains("No available Cars for the requested schedule."));
    assert!(output.contains("Available Vans for the requested schedule:"));
    assert!(output.contains("Registration Number: VAN001, Make: Ford, Model: Transit"));

    assert_eq!(ledger.fleet_size(), 2);
    assert_eq!(ledger.vehicle("ABC123").unwrap().make(), "Toyota");
    let bookings = ledger.reservations_for("ABC123");
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].schedule, span(1, 5));
    assert_eq!(bookings[1].schedule, span(5, 10));
    assert_eq!(
        bookings[0].driver.to_string(),
        "Jane Doe, DOB: 05/17/1990, License: D1234567"
    );
}

#[test]
fn test_bad_input_never_mutates() {
    let lines = [
        "abc", "9",
        "2",
        // price is not a number
        "1", "CAR002", "Honda", "Civic", "cheap",
        // unknown type
        "1", "CAR003", "Honda", "Civic", "40", "truck",
        "7", "6",
        "1",
        // malformed dates
        "2", "ABC123", "2024-01-01",
        "1", "01/01/2024",
        // dropoff before pickup
        "2", "ABC123", "01/05/2024", "01/01/2024",
        // driver DOB malformed after a valid quote
        "2", "ABC123", "01/01/2024", "01/02/2024", "Jane", "Doe", "17/05/1990",
        "5", "3",
    ];

    let (ledger, output) = run_script(seeded_ledger(), Config::default(), &lines);

    assert!(output.contains("Invalid input. Please enter a valid number."));
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Invalid daily rental price. Please enter a valid decimal value."));
    assert!(output.contains("unknown vehicle type 'truck'"));
    assert!(output.contains("Invalid date format. Please enter the date in MM/DD/YYYY format."));
    assert!(output.contains("Invalid schedule format. Please enter dates in MM/DD/YYYY format."));
    assert!(output.contains("must be before dropoff"));

    assert_eq!(ledger.fleet_size(), 1);
    assert!(ledger.reservations().is_empty());
}

#[test]
fn test_change_and_delete_reservations() {
    let mut ledger = seeded_ledger();
    ledger
        .add_reservation("ABC123", span(1, 10), driver())
        .unwrap();
    ledger
        .add_reservation("ABC123", span(20, 25), driver())
        .unwrap();

    let lines = [
        "1",
        // Shrink own slot: Jan 1-10 -> Jan 1-5
        "3", "ABC123", "01/01/2024", "01/10/2024", "01/01/2024", "01/05/2024",
        // Move onto the other booking
        "3", "ABC123", "01/01/2024", "01/05/2024", "01/22/2024", "01/28/2024",
        // Change a booking that does not exist
        "3", "ABC123", "02/01/2024", "02/03/2024", "03/01/2024", "03/03/2024",
        // Delete a booking that does not exist, then the real one
        "4", "ABC123", "01/20/2024", "01/24/2024",
        "4", "NOPE", "01/20/2024", "01/25/2024",
        "4", "ABC123", "01/20/2024", "01/25/2024",
        "5", "3",
    ];

    let (ledger, output) = run_script(ledger, Config::default(), &lines);

    assert!(output.contains("Reservation changed successfully. New total price: $200.00"));
    assert!(output.contains("Schedule overlaps with an existing booking for vehicle ABC123."));
    assert!(output
        .contains("Reservation not found for vehicle ABC123 and the specified schedule."));
    assert!(output.contains("Vehicle with registration number NOPE not found."));
    assert!(output.contains("Reservation deleted successfully."));

    let bookings = ledger.reservations_for("ABC123");
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].schedule, span(1, 5));
}

#[test]
fn test_report_and_delete_vehicle_from_admin_menu() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config {
        report_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    let mut ledger = seeded_ledger();
    ledger.add_reservation("ABC123", span(3, 4), driver()).unwrap();

    let lines = [
        "2",
        "3",
        "5", "fleet.txt",
        "5", "missing-dir/fleet.txt",
        "5", "  ",
        "2", "NOPE",
        "2", "ABC123",
        "4",
        "6", "3",
    ];

    let (ledger, output) = run_script(ledger, config, &lines);

    let report_path = dir.path().join("fleet.txt");
    let report = std::fs::read_to_string(&report_path).expect("report written");
    assert_eq!(
        report,
        "Vehicle Information - Registration Number: ABC123, Make: Toyota, Model: Corolla\n\
         \x20 Booking Details - Pickup Date: 01/03/2024, Dropoff Date: 01/04/2024\n\
         \x20   Driver Details - Jane Doe, DOB: 05/17/1990, License: D1234567\n\
         \n"
    );

    assert!(output.contains("Registration Number: ABC123, Make: Toyota, Model: Corolla"));
    assert!(output.contains(&format!(
        "Report generated successfully. Saved to {}",
        report_path.display()
    )));
    assert!(output.contains("Error: Failed to write report to"));
    assert!(output.contains("Please enter a file name for the report."));
    assert!(output.contains("Vehicle with registration number NOPE not found."));
    assert!(output.contains("Vehicle ABC123 deleted. Available parking lots: 50"));
    assert!(output.contains("1 reservation(s) for this vehicle were cancelled."));
    assert!(output.contains("No vehicles in the fleet."));

    assert_eq!(ledger.fleet_size(), 0);
    assert!(ledger.reservations().is_empty());
}

#[test]
fn test_json_listing_and_end_of_input() {
    let config = Config {
        output_format: rental_types::OutputFormat::Json,
        ..Config::default()
    };

    // Input ends in the middle of the add-vehicle prompts
    let lines = ["2", "3", "1", "XYZ"];
    let (ledger, output) = run_script(seeded_ledger(), config, &lines);

    assert!(output.contains("\"registration\": \"ABC123\""));
    assert!(output.contains("\"vehicle_type\": \"Car\""));
    assert_eq!(ledger.fleet_size(), 1);
}

fn driver() -> rental_domain::DriverDetails {
    rental_domain::DriverDetails {
        name: "Jane".to_string(),
        surname: "Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        license_number: "D1234567".to_string(),
    }
}
