use samokat_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("showcase configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ShowcaseError {
    /// `true` for transport, status, and decode failures; `false` for
    /// configuration problems caught before any request was made.
    #[must_use]
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
