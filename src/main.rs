#![doc = include_str!("../README.md")]

mod cli;
mod config;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    config::Catalog,
    core::Estimator,
    prelude::*,
    tables::{build_battery_table, build_projection_table, build_provider_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let catalog = Catalog::load(args.catalog.as_deref())?;

    match args.command {
        Command::Estimate(estimate) => {
            let schedule = catalog.rate_schedule(&estimate.provider)?;
            let capacity = estimate.battery.capacity(&catalog)?;
            let projection = Estimator::builder()
                .monthly_bill(estimate.monthly_bill)
                .schedule(schedule)
                .battery_capacity(capacity)
                .estimate()?;
            if let Some(shortfall) = projection.shortfall() {
                warn!(%shortfall, "the battery bank does not cover the whole peak-hour usage");
            }
            if estimate.json {
                println!("{}", serde_json::to_string_pretty(&projection.rounded())?);
            } else {
                println!("{}", build_projection_table(&projection));
            }
            Ok(())
        }

        Command::Catalog => {
            println!("{}", build_provider_table(&catalog));
            println!("{}", build_battery_table(&catalog));
            Ok(())
        }
    }
}
