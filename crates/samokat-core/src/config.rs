use crate::app_config::{AppConfig, DEFAULT_SHOWCASE_BASE_URL, DEFAULT_TELEGRAM_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Fields are validated one at a time in a fixed order; the first failure is
/// returned and later fields are not inspected.
///
/// The Telegram token and chat id are read raw (empty when unset) because
/// only the delivery phase needs them; `--dry-run` runs without them.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let require_i64 = |var: &str| -> Result<i64, ConfigError> {
        let raw = require(var)?;
        raw.parse::<i64>().map_err(|e| invalid(var, e.to_string()))
    };

    let require_coordinate = |var: &str| -> Result<f64, ConfigError> {
        let raw = require(var)?;
        let value = raw.parse::<f64>().map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, format!("{raw} is not a finite number")))
        }
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let telegram_api_token = lookup("TELEGRAM_APITOKEN").unwrap_or_default();
    let telegram_chat_id = lookup("TELEGRAM_CHAT_ID").unwrap_or_default();

    let min_discount = require_i64("SAMOKAT_MIN_DISCOUNT")?;
    let lat = require_coordinate("SAMOKAT_LAT")?;
    let lon = require_coordinate("SAMOKAT_LON")?;

    let log_level = or_default("SAMOKAT_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("SAMOKAT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "SAMOKAT_USER_AGENT",
        "samokat-deals/0.1 (discount-notifier)",
    );
    let showcase_base_url = or_default("SAMOKAT_API_BASE_URL", DEFAULT_SHOWCASE_BASE_URL);
    let telegram_base_url = or_default("TELEGRAM_API_BASE_URL", DEFAULT_TELEGRAM_BASE_URL);

    Ok(AppConfig {
        telegram_api_token,
        telegram_chat_id,
        min_discount,
        lat,
        lon,
        log_level,
        request_timeout_secs,
        user_agent,
        showcase_base_url,
        telegram_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
