pub mod app_config;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_SHOWCASE_BASE_URL, DEFAULT_TELEGRAM_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{discount_percent, DiscountedProduct};

/// Errors raised while reading or validating environment-derived settings.
///
/// Every variant names the offending variable so the first failing field is
/// reported on its own.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    /// Latitude or longitude is exactly `0.0`, which is treated as unset.
    #[error("{0} is zero; refusing to query an unset coordinate")]
    ZeroCoordinate(String),
}
