//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use hydrosight_common::AppConfig;

/// Command-line arguments for the HydroSight desktop app.
#[derive(Parser, Debug, Clone, Default)]
#[command(about = "HydroSight - Smart-home water monitoring dashboard")]
pub struct Args {
    /// Path to a JSON5 configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible simulation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Load the configuration file (or defaults) and apply CLI overrides.
    pub fn load_config(&self) -> hydrosight_common::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply CLI overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from(["hydrosight", "--seed", "42", "--log-level", "debug"])
            .expect("valid arguments");
        assert_eq!(args.seed, Some(42));
        assert!(args.config.is_none());

        let config = args.load_config().expect("defaults load");
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = AppConfig::default();
        config.simulation.seed = Some(7);
        Args::default().apply(&mut config);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/hydrosight.json5")),
            ..Args::default()
        };
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Args::try_parse_from(["hydrosight", "--seed", "soon"]).is_err());
    }
}
