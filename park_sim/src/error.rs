//! Startup error type.

use park::config::ConfigError;
use park::ride::RideError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bringing up the park.
#[derive(Debug, Clone, Error)]
pub enum ParkError {
    /// Configuration file could not be loaded or is invalid.
    #[error("{}: {source}", .path.display())]
    Load {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying configuration error.
        source: ConfigError,
    },

    /// Configuration is inconsistent with the compiled tables.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A configured ride could not be placed.
    #[error("rides[{seed}]: {source}")]
    Seed {
        /// Position of the seed in `[[rides]]`.
        seed: usize,
        /// Underlying table error.
        source: RideError,
    },
}
