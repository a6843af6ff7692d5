//! HydroSight Common Library
//!
//! This crate holds everything in HydroSight that is not drawing:
//!
//! - [`usage`] - Household water data model (`DailyStats`, `WaterEvent`, flows and leaks)
//! - [`simulation`] - Pure tick transition and the `Simulator` that owns household state
//! - [`wizard`] - Scripted AR repair step machine
//! - [`grid`] - Neighborhood sensor generation and Delaunay triangulation
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`scripted`] - Deterministic random source for reproducible scenarios
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod grid;
pub mod scripted;
pub mod simulation;
pub mod usage;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::{
    AppConfig, LogFormat, LoggingConfig, MapConfig, SimulationConfig, load_config, parse_config,
};
pub use error::{Error, Result};
pub use grid::{NeighborData, PressureStatus, generate_neighborhood, triangle_edges, triangulate};
pub use scripted::ScriptedRng;
pub use simulation::{HomeState, LeakSensitivity, Simulator, TickInput, tick};
pub use usage::{
    ActiveFlow, DailyStats, DayUsage, EventIcon, GhostLeak, Notification, WEEKLY_USAGE,
    WaterEvent, current_timestamp_millis,
};
pub use wizard::{RepairStep, RepairWizard, StepInfo, WizardOutcome};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Tracing(e.to_string()))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Tracing(e.to_string()))?;
        }
    }

    Ok(())
}
