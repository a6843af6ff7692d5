use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::simulation::LeakSensitivity;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Simulation loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Interval between simulation ticks, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Initial Ghost Hunter sensitivity (0-100). Out-of-range values are clamped.
    #[serde(default = "default_leak_sensitivity")]
    pub leak_sensitivity: u16,

    /// Optional seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_leak_sensitivity() -> u16 {
    u16::from(LeakSensitivity::DEFAULT)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            leak_sensitivity: default_leak_sensitivity(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// The configured sensitivity, clamped into range.
    pub fn sensitivity(&self) -> LeakSensitivity {
        LeakSensitivity::new(u8::try_from(self.leak_sensitivity).unwrap_or(LeakSensitivity::MAX))
    }

    /// Simulated time covered by each tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Neighborhood map settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Number of synthetic sensors generated per map mount.
    #[serde(default = "default_sensors")]
    pub sensors: usize,
}

fn default_sensors() -> usize {
    50
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            sensors: default_sensors(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name used in the dashboard greeting.
    #[serde(default = "default_resident")]
    pub resident: String,

    /// Simulation settings.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Neighborhood map settings.
    #[serde(default)]
    pub map: MapConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_resident() -> String {
    "Alex".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resident: default_resident(),
            simulation: SimulationConfig::default(),
            map: MapConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a JSON5 file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.simulation.tick_interval_ms == 0 {
            return Err(Error::Config(
                "simulation.tick_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.map.sensors == 0 {
            return Err(Error::Config(
                "map.sensors must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    Ok(json5::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let json5 = r#"
        {
            resident: "Sam",
            simulation: {
                tick_interval_ms: 500,
                leak_sensitivity: 20,
                seed: 42,
            },
            map: { sensors: 12 },
            logging: {
                level: "debug",
                format: "json",
            },
        }
        "#;

        let config: AppConfig = parse_config(json5).unwrap();

        assert_eq!(config.resident, "Sam");
        assert_eq!(config.simulation.tick_interval_ms, 500);
        assert_eq!(config.simulation.tick_interval(), Duration::from_millis(500));
        assert_eq!(config.simulation.sensitivity().value(), 20);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.map.sensors, 12);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config: AppConfig = parse_config("{}").unwrap();

        assert_eq!(config.resident, "Alex");
        assert_eq!(config.simulation.tick_interval_ms, 1000);
        assert_eq!(config.simulation.leak_sensitivity, 75);
        assert!(config.simulation.seed.is_none());
        assert_eq!(config.map.sensors, 50);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_sensitivity_is_clamped() {
        let config: AppConfig = parse_config("{ simulation: { leak_sensitivity: 180 } }").unwrap();
        assert_eq!(config.simulation.sensitivity().value(), 100);

        // Beyond the range of a byte.
        let config: AppConfig = parse_config("{ simulation: { leak_sensitivity: 300 } }").unwrap();
        assert_eq!(config.simulation.sensitivity().value(), 100);
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = AppConfig::default();
        config.simulation.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = AppConfig::default();
        config.map.sensors = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_parse_error() {
        let result: Result<AppConfig> = parse_config("{ resident: ");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::load_from_file("/nonexistent/hydrosight.json5");
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
