//! HydroSight - Smart-home water monitoring dashboard.
//!
//! Simulates household water use and renders a dashboard, a neighborhood
//! pressure map and a guided repair assistant.

use clap::Parser;
use iced::application;

use hydrosight::HydroSight;
use hydrosight::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    hydrosight_common::init_tracing(&config.logging)?;

    tracing::info!(
        config = ?args.config,
        seed = ?config.simulation.seed,
        "Starting HydroSight"
    );

    application(
        move || HydroSight::boot(config.clone()),
        HydroSight::update,
        HydroSight::view,
    )
    .title(HydroSight::title)
    .subscription(HydroSight::subscription)
    .theme(HydroSight::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
