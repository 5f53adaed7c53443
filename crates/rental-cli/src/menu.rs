//! Interactive console menus driving the ledger
//!
//! Generic over the input and output streams so whole sessions can be
//! scripted in tests. End of input ends the session.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use rental_app::{resolve_report_path, Config};
use rental_domain::{
    format_currency, DriverDetails, FleetManager, Ledger, RentalCustomer, Schedule, Vehicle,
    VehicleType,
};
use rental_infra::write_report_file;
use rental_types::{Error, LedgerError, Result};
use tracing::warn;

use crate::input::{parse_choice, parse_date_input, parse_date_range, parse_price, InputError};
use crate::output::{write_available, write_vehicles};

/// Where a submenu hands control back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Exit,
}

/// Outcome of a single menu action that may be abandoned
type Step<T> = std::result::Result<T, Abort>;

/// Why an action stopped before reaching the ledger
enum Abort {
    Input(InputError),
    Ledger(LedgerError),
    Fatal(Error),
}

impl From<InputError> for Abort {
    fn from(err: InputError) -> Self {
        Abort::Input(err)
    }
}

impl From<LedgerError> for Abort {
    fn from(err: LedgerError) -> Self {
        Abort::Ledger(err)
    }
}

impl From<Error> for Abort {
    fn from(err: Error) -> Self {
        Abort::Fatal(err)
    }
}

impl From<io::Error> for Abort {
    fn from(err: io::Error) -> Self {
        Abort::Fatal(err.into())
    }
}

/// One interactive session over a ledger
pub struct Session<R, W> {
    input: R,
    out: W,
    ledger: Ledger,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, ledger: Ledger, config: Config) -> Self {
        Self {
            input,
            out,
            ledger,
            config,
        }
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run the main menu until "Exit" or end of input
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                writeln!(self.out)?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "1. Customer Menu")?;
            writeln!(self.out, "2. Admin Menu")?;
            writeln!(self.out, "3. Exit")?;

            let flow = match self.read_choice()? {
                Some(1) => self.customer_menu()?,
                Some(2) => self.admin_menu()?,
                Some(3) => Flow::Exit,
                Some(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Flow::Back
                }
                None => Flow::Back,
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn customer_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "Customer Menu")?;
            writeln!(self.out, "1. List Available Vehicles")?;
            writeln!(self.out, "2. Add Reservation")?;
            writeln!(self.out, "3. Change Reservation")?;
            writeln!(self.out, "4. Delete Reservation")?;
            writeln!(self.out, "5. Back to Main Menu")?;

            let step = match self.read_choice()? {
                Some(1) => self.list_available(),
                Some(2) => self.add_reservation(),
                Some(3) => self.change_reservation(),
                Some(4) => self.delete_reservation(),
                Some(5) => return Ok(Flow::Back),
                Some(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Ok(())
                }
                None => Ok(()),
            };
            self.finish(step)?;
        }
    }

    fn admin_menu(&mut self) -> Result<Flow> {
        loop {
            writeln!(self.out, "Admin Menu")?;
            writeln!(self.out, "1. Add Vehicle")?;
            writeln!(self.out, "2. Delete Vehicle")?;
            writeln!(self.out, "3. List Vehicles")?;
            writeln!(self.out, "4. List Ordered Vehicles")?;
            writeln!(self.out, "5. Generate Report")?;
            writeln!(self.out, "6. Back to Main Menu")?;

            let step = match self.read_choice()? {
                Some(1) => self.add_vehicle(),
                Some(2) => self.delete_vehicle(),
                Some(3) => self.list_vehicles(false),
                Some(4) => self.list_vehicles(true),
                Some(5) => self.generate_report(),
                Some(6) => return Ok(Flow::Back),
                Some(_) => {
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                    Ok(())
                }
                None => Ok(()),
            };
            self.finish(step)?;
        }
    }

    /// Report an abandoned action and return to the menu; only fatal errors escape
    fn finish(&mut self, step: Step<()>) -> Result<()> {
        match step {
            Ok(()) => Ok(()),
            Err(Abort::Input(e)) => {
                writeln!(self.out, "{}", e)?;
                Ok(())
            }
            Err(Abort::Ledger(e)) => {
                writeln!(self.out, "{}", e)?;
                Ok(())
            }
            Err(Abort::Fatal(e @ Error::Report { .. })) => {
                warn!(error = %e, "report generation failed");
                writeln!(self.out, "Error: {}", e)?;
                Ok(())
            }
            Err(Abort::Fatal(e)) => Err(e),
        }
    }

    // ------------------------------------------------------------------
    // Console helpers
    // ------------------------------------------------------------------

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read a menu number; prints the error and yields `None` when it is not a number
    fn read_choice(&mut self) -> Result<Option<u32>> {
        let line = self.read_line()?;
        match parse_choice(&line) {
            Ok(choice) => Ok(Some(choice)),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(None)
            }
        }
    }

    fn prompt_date(&mut self, label: &str) -> Step<NaiveDate> {
        let line = self.prompt(label)?;
        Ok(parse_date_input(&line)?)
    }

    fn prompt_schedule(&mut self, pickup_label: &str, dropoff_label: &str) -> Step<Schedule> {
        let pickup = self.prompt_date(pickup_label)?;
        let dropoff = self.prompt_date(dropoff_label)?;
        Ok(Schedule::from_dates(pickup, dropoff)?)
    }

    fn prompt_registration(&mut self) -> io::Result<String> {
        Ok(self
            .prompt("Enter the registration number of the vehicle: ")?
            .trim()
            .to_string())
    }

    fn money(&self, amount: rust_decimal::Decimal) -> String {
        format_currency(amount, &self.config.currency_symbol)
    }

    // ------------------------------------------------------------------
    // Customer actions
    // ------------------------------------------------------------------

    fn list_available(&mut self) -> Step<()> {
        let line = self.prompt(
            "Enter the schedule details (Pickup Date(MM/DD/YYYY) - Dropoff Date(MM/DD/YYYY)): ",
        )?;
        let (pickup, dropoff) = parse_date_range(&line)?;
        let schedule = Schedule::from_dates(pickup, dropoff)?;

        let line = self.prompt("Enter the type of vehicle (Car, Van, ElectricCar, Motorbike): ")?;
        let vehicle_type: VehicleType = line.parse()?;

        let available = self.ledger.list_available_vehicles(&schedule, vehicle_type);
        write_available(&mut self.out, self.config.output_format, vehicle_type, &available)?;
        Ok(())
    }

    fn add_reservation(&mut self) -> Step<()> {
        let registration = self.prompt_registration()?;
        let schedule = self.prompt_schedule(
            "Enter the pickup date (MM/DD/YYYY): ",
            "Enter the dropoff date (MM/DD/YYYY): ",
        )?;

        // Reject before asking for driver details
        self.ledger.quote_reservation(&registration, &schedule)?;

        let name = self.prompt("Enter driver's name: ")?.trim().to_string();
        let surname = self.prompt("Enter driver's surname: ")?.trim().to_string();
        let date_of_birth = self.prompt_date("Enter driver's date of birth (MM/DD/YYYY): ")?;
        let license_number = self
            .prompt("Enter driver's license number: ")?
            .trim()
            .to_string();
        let driver = DriverDetails {
            name,
            surname,
            date_of_birth,
            license_number,
        };

        let receipt = self.ledger.add_reservation(&registration, schedule, driver)?;
        let price = self.money(receipt.total_price);
        writeln!(
            self.out,
            "Reservation added successfully. Total price: {}",
            price
        )?;
        Ok(())
    }

    fn change_reservation(&mut self) -> Step<()> {
        let registration = self.prompt_registration()?;
        let old = self.prompt_schedule(
            "Enter the current pickup date (MM/DD/YYYY): ",
            "Enter the current dropoff date (MM/DD/YYYY): ",
        )?;
        let new = self.prompt_schedule(
            "Enter the new pickup date (MM/DD/YYYY): ",
            "Enter the new dropoff date (MM/DD/YYYY): ",
        )?;

        let receipt = self.ledger.change_reservation(&registration, &old, new)?;
        let price = self.money(receipt.total_price);
        writeln!(
            self.out,
            "Reservation changed successfully. New total price: {}",
            price
        )?;
        Ok(())
    }

    fn delete_reservation(&mut self) -> Step<()> {
        let registration = self.prompt_registration()?;
        let schedule = self.prompt_schedule(
            "Enter the pickup date (MM/DD/YYYY): ",
            "Enter the dropoff date (MM/DD/YYYY): ",
        )?;

        self.ledger.delete_reservation(&registration, &schedule)?;
        writeln!(self.out, "Reservation deleted successfully.")?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Admin actions
    // ------------------------------------------------------------------

    fn add_vehicle(&mut self) -> Step<()> {
        writeln!(self.out, "Enter vehicle details:")?;
        let registration = self.prompt("Registration Number: ")?;
        let make = self.prompt("Make: ")?.trim().to_string();
        let model = self.prompt("Model: ")?.trim().to_string();
        let daily_rate = parse_price(&self.prompt("Daily Rental Price: ")?)?;
        let vehicle_type: VehicleType = self
            .prompt("Vehicle Type (Car, Van, ElectricCar, Motorbike): ")?
            .parse()?;

        let vehicle = Vehicle::new(registration, make, model, daily_rate, vehicle_type)?;
        let registration = vehicle.registration().to_string();
        self.ledger.add_vehicle(vehicle)?;
        writeln!(
            self.out,
            "Vehicle {} added. Available parking lots: {}",
            registration,
            self.ledger.available_parking_lots()
        )?;
        Ok(())
    }

    fn delete_vehicle(&mut self) -> Step<()> {
        let registration = self
            .prompt("Enter the registration number of the vehicle to delete: ")?
            .trim()
            .to_string();

        let removed = self.ledger.delete_vehicle(&registration)?;
        writeln!(
            self.out,
            "Vehicle {} deleted. Available parking lots: {}",
            removed.vehicle.registration(),
            self.ledger.available_parking_lots()
        )?;
        if !removed.cancelled.is_empty() {
            writeln!(
                self.out,
                "{} reservation(s) for this vehicle were cancelled.",
                removed.cancelled.len()
            )?;
        }
        Ok(())
    }

    fn list_vehicles(&mut self, ordered: bool) -> Step<()> {
        let vehicles = if ordered {
            self.ledger.list_ordered_vehicles()
        } else {
            self.ledger.list_vehicles()
        };
        write_vehicles(&mut self.out, self.config.output_format, &vehicles)?;
        Ok(())
    }

    fn generate_report(&mut self) -> Step<()> {
        let file_name = self.prompt("Enter the file name for the report: ")?;
        if file_name.trim().is_empty() {
            return Err(InputError::EmptyFileName.into());
        }

        let path = resolve_report_path(&self.config, &file_name);
        write_report_file(&self.ledger, &path)?;
        writeln!(
            self.out,
            "Report generated successfully. Saved to {}",
            path.display()
        )?;
        Ok(())
    }
}
