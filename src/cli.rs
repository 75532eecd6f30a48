use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::Catalog,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    /// Path to a TOML tariff catalog replacing the built-in tables.
    #[clap(long, env = "PEAKSHAVE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate the peak-shaving savings for a monthly bill.
    Estimate(Box<EstimateArgs>),

    /// Print the known utility providers and battery models.
    Catalog,
}

#[derive(Parser)]
pub struct EstimateArgs {
    /// Monthly electricity bill in dollars.
    #[clap(long = "monthly-bill", env = "MONTHLY_BILL")]
    pub monthly_bill: Cost,

    /// Utility provider from the catalog.
    #[clap(long, default_value = "pge", env = "PROVIDER")]
    pub provider: String,

    #[clap(flatten)]
    pub battery: BatteryArgs,

    /// Print the projection as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Clone, Parser)]
pub struct BatteryArgs {
    /// Battery model from the catalog.
    #[clap(long = "battery-model", default_value = "powerwall-2", env = "BATTERY_MODEL")]
    pub model: String,

    /// Number of installed battery units.
    #[clap(long = "batteries", default_value = "1", env = "N_BATTERIES")]
    pub count: u32,

    /// Total usable storage in kilowatt-hours, bypassing the model lookup.
    #[clap(long = "storage-kwh", env = "STORAGE_KWH")]
    pub storage: Option<KilowattHours>,
}

impl BatteryArgs {
    /// Total storage available for shifting the peak-hour load.
    pub fn capacity(&self, catalog: &Catalog) -> Result<KilowattHours> {
        match self.storage {
            Some(storage) => Ok(storage),
            None => Ok(catalog.battery_profile(&self.model)?.storage * f64::from(self.count)),
        }
    }
}
