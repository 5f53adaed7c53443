//! Command handlers

use crate::cli::{Cli, Commands};
use crate::menu::Session;
use crate::output::write_vehicles;
use rental_app::{open_ledger, resolve_report_path, Config};
use rental_domain::FleetManager;
use rental_infra::write_report_file;
use rental_types::{OutputFormat, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    let fleet = cli.fleet.as_deref();

    match &cli.command {
        None | Some(Commands::Run) => cmd_run(config, fleet),

        Some(Commands::Fleet { ordered }) => cmd_fleet(&config, fleet, *ordered),

        Some(Commands::Report { file }) => cmd_report(&config, fleet, file),

        Some(Commands::Config {
            show,
            set_parking_lots,
            set_currency,
            set_output,
            set_report_dir,
            set_fleet_file,
            set_cascade_delete,
            reset,
        }) => cmd_config(ConfigUpdate {
            show: *show,
            parking_lots: *set_parking_lots,
            currency: set_currency.clone(),
            output: *set_output,
            report_dir: set_report_dir.clone(),
            fleet_file: set_fleet_file.clone(),
            cascade_delete: *set_cascade_delete,
            reset: *reset,
        }),
    }
}

fn cmd_run(config: Config, fleet: Option<&Path>) -> Result<()> {
    let ledger = open_ledger(&config, fleet)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), ledger, config);
    session.run()
}

fn cmd_fleet(config: &Config, fleet: Option<&Path>, ordered: bool) -> Result<()> {
    let ledger = open_ledger(config, fleet)?;
    let vehicles = if ordered {
        ledger.list_ordered_vehicles()
    } else {
        ledger.list_vehicles()
    };

    let stdout = io::stdout();
    write_vehicles(&mut stdout.lock(), config.output_format, &vehicles)
}

fn cmd_report(config: &Config, fleet: Option<&Path>, file: &str) -> Result<()> {
    let ledger = open_ledger(config, fleet)?;
    let path = resolve_report_path(config, file);
    write_report_file(&ledger, &path)?;
    println!("Report generated successfully. Saved to {}", path.display());
    Ok(())
}

/// Requested changes from `config` flags
#[derive(Debug, Default)]
struct ConfigUpdate {
    show: bool,
    parking_lots: Option<usize>,
    currency: Option<String>,
    output: Option<OutputFormat>,
    report_dir: Option<PathBuf>,
    fleet_file: Option<PathBuf>,
    cascade_delete: Option<bool>,
    reset: bool,
}

impl ConfigUpdate {
    /// Apply setters to `config`; returns whether anything changed
    fn apply(self, config: &mut Config) -> bool {
        let mut modified = false;

        if let Some(lots) = self.parking_lots {
            config.parking_lots = lots;
            println!("Parking lots set to: {}", lots);
            modified = true;
        }
        if let Some(symbol) = self.currency {
            println!("Currency symbol set to: {}", symbol);
            config.currency_symbol = symbol;
            modified = true;
        }
        if let Some(format) = self.output {
            config.output_format = format;
            println!("Output format set to: {}", format);
            modified = true;
        }
        if let Some(dir) = self.report_dir {
            println!("Report dir set to: {}", dir.display());
            config.report_dir = Some(dir);
            modified = true;
        }
        if let Some(file) = self.fleet_file {
            println!("Fleet file set to: {}", file.display());
            config.fleet_file = Some(file);
            modified = true;
        }
        if let Some(cascade) = self.cascade_delete {
            config.cascade_vehicle_delete = cascade;
            println!("Cascade delete set to: {}", cascade);
            modified = true;
        }

        modified
    }
}

fn cmd_config(update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let show = update.show;
    let mut config = Config::load()?;
    let modified = update.apply(&mut config);

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
