use std::path::PathBuf;

use thiserror::Error;

/// Common error type for HydroSight components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),
}

/// Result type alias using HydroSight's Error.
pub type Result<T> = std::result::Result<T, Error>;
