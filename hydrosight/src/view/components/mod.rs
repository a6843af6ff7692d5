//! Reusable UI components for the HydroSight screens.

pub mod pulse;
pub mod status_led;
pub mod usage_chart;

pub use pulse::PulseGauge;
pub use status_led::{StatusLed, StatusLedState};
pub use usage_chart::{UsageChart, UsageChartState};
