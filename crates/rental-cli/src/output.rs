//! Output formatting module

use rental_domain::{Vehicle, VehicleType};
use rental_types::{OutputFormat, Result};
use std::io::Write;

fn vehicle_line(vehicle: &Vehicle) -> String {
    format!(
        "Registration Number: {}, Make: {}, Model: {}",
        vehicle.registration(),
        vehicle.make(),
        vehicle.model()
    )
}

/// Print a vehicle listing as table lines or a JSON array
pub fn write_vehicles<W: Write + ?Sized>(
    out: &mut W,
    output_format: OutputFormat,
    vehicles: &[&Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(vehicles)?;
        writeln!(out, "{}", content)?;
    } else if vehicles.is_empty() {
        writeln!(out, "No vehicles in the fleet.")?;
    } else {
        for vehicle in vehicles {
            writeln!(out, "{}", vehicle_line(vehicle))?;
        }
    }
    Ok(())
}

/// Print the result of an availability query
pub fn write_available<W: Write + ?Sized>(
    out: &mut W,
    output_format: OutputFormat,
    vehicle_type: VehicleType,
    vehicles: &[&Vehicle],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return write_vehicles(out, output_format, vehicles);
    }

    if vehicles.is_empty() {
        writeln!(
            out,
            "No available {}s for the requested schedule.",
            vehicle_type
        )?;
    } else {
        writeln!(out, "Available {}s for the requested schedule:", vehicle_type)?;
        for vehicle in vehicles {
            writeln!(out, "{}", vehicle_line(vehicle))?;
        }
    }
    Ok(())
}
