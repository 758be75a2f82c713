//! HTTP client for the Samokat showcase endpoint.
//!
//! One request per run: no retries, no pagination. Callers get the flattened
//! product list or a typed [`ShowcaseError`].

use std::time::Duration;

use reqwest::{Client, Url};
use samokat_core::{AppConfig, ConfigError};

use crate::error::ShowcaseError;
use crate::types::{ShowcaseProduct, ShowcaseResponse};

const SHOWCASE_PATH: &str = "showcase/showcases";

/// Coordinates the showcase is queried for.
///
/// A coordinate of exactly `0.0` means "not configured"; [`ShowcaseClient`]
/// rejects it before sending anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseQuery {
    pub lat: f64,
    pub lon: f64,
}

impl ShowcaseQuery {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.lat, config.lon)
    }

    /// Rejects a zero latitude or longitude, latitude first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCoordinate`] naming the offending variable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lat == 0.0 {
            return Err(ConfigError::ZeroCoordinate("SAMOKAT_LAT".to_string()));
        }
        if self.lon == 0.0 {
            return Err(ConfigError::ZeroCoordinate("SAMOKAT_LON".to_string()));
        }
        Ok(())
    }
}

/// Client for the public showcase API.
///
/// Production code builds it with [`ShowcaseClient::from_app_config`];
/// tests point [`ShowcaseClient::with_base_url`] at a mock server.
pub struct ShowcaseClient {
    client: Client,
    base_url: Url,
}

impl ShowcaseClient {
    /// Creates a client from the loaded application config, honoring the
    /// `SAMOKAT_API_BASE_URL` override.
    ///
    /// # Errors
    ///
    /// See [`ShowcaseClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ShowcaseError> {
        Self::with_base_url(
            config.request_timeout_secs,
            &config.user_agent,
            &config.showcase_base_url,
        )
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ShowcaseError::Config`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ShowcaseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends to the root path
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ConfigError::InvalidEnvVar {
            var: "SAMOKAT_API_BASE_URL".to_string(),
            reason: format!("'{base_url}': {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the showcase for `query` and returns every product in it.
    ///
    /// Product ids are discarded; the returned order is unspecified.
    ///
    /// # Errors
    ///
    /// - [`ShowcaseError::Config`] if either coordinate is zero. No request
    ///   is made in that case.
    /// - [`ShowcaseError::Http`] on connection failure or timeout.
    /// - [`ShowcaseError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ShowcaseError::Deserialize`] if the body is not the expected JSON
    ///   object.
    pub async fn fetch_products(
        &self,
        query: &ShowcaseQuery,
    ) -> Result<Vec<ShowcaseProduct>, ShowcaseError> {
        query.validate()?;

        let url = self.showcase_url(query);
        tracing::debug!(%url, "fetching showcase");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShowcaseError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ShowcaseResponse>(&body).map_err(|e| {
            ShowcaseError::Deserialize {
                context: format!("showcase at lat={:.6} lon={:.6}", query.lat, query.lon),
                source: e,
            }
        })?;

        let products: Vec<ShowcaseProduct> = parsed.products.into_values().collect();
        tracing::debug!(count = products.len(), "decoded showcase products");
        Ok(products)
    }

    /// Builds `<base>/showcase/showcases?version=0&lat=..&lon=..` with both
    /// coordinates rendered to six decimal places.
    fn showcase_url(&self, query: &ShowcaseQuery) -> Url {
        let mut url = self.base_url.clone();
        // http(s) bases always have path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(SHOWCASE_PATH.split('/'));
        }
        url.query_pairs_mut()
            .append_pair("version", "0")
            .append_pair("lat", &format!("{:.6}", query.lat))
            .append_pair("lon", &format!("{:.6}", query.lon));
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
