//! CLI definition using clap

use clap::{Parser, Subcommand};
use rental_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rental-ledger")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "In-memory vehicle rental ledger with fleet and reservation menus")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format for listings (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// TOML file to seed the fleet from. Uses config value if not specified.
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive customer/admin menu
    Run,

    /// List the seeded fleet
    Fleet {
        /// Order by make instead of insertion order
        #[arg(long)]
        ordered: bool,
    },

    /// Write the fleet report for the seeded fleet.
    ///
    /// The ledger is rebuilt from the fleet file, so the report lists vehicles
    /// only; bookings exist only inside an interactive `run` session.
    #[command(after_help = "Reservations live in memory only; this report never lists bookings.")]
    Report {
        /// Report file name (relative names go under the configured report dir)
        file: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the number of parking lots shown to staff
        #[arg(long)]
        set_parking_lots: Option<usize>,

        /// Set the currency symbol for prices
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the directory for report files
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// Set the fleet seed file
        #[arg(long)]
        set_fleet_file: Option<PathBuf>,

        /// Cancel a vehicle's reservations when it is deleted
        #[arg(long)]
        set_cascade_delete: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
