//! Minimal HTTP client for the Telegram Bot API.
//!
//! Only the two methods a report run needs are exposed: `getMe` to confirm
//! the token and `sendMessage` to deliver the text.

use std::time::Duration;

use reqwest::{Client, Url};
use samokat_core::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::NotifyError;
use crate::types::{ApiResponse, BotUser, SendMessageRequest, SentMessage};

/// Client bound to a single bot token.
///
/// Built through [`crate::TelegramNotifier`], which supplies the base URL
/// from config (or a mock server in tests).
pub struct TelegramClient {
    client: Client,
    api_token: String,
    base_url: Url,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_token", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Creates a client that calls `<base_url>/bot<token>/<method>`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NotifyError::Config`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ConfigError::InvalidEnvVar {
            var: "TELEGRAM_API_BASE_URL".to_string(),
            reason: format!("'{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_token: api_token.to_owned(),
            base_url,
        })
    }

    /// Calls `getMe` and returns the bot account the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Auth`] when the request fails or Telegram
    /// answers `ok: false` (typically 401 Unauthorized).
    pub async fn get_me(&self) -> Result<BotUser, NotifyError> {
        self.call("getMe", &serde_json::json!({}))
            .await
            .map_err(|reason| NotifyError::Auth { reason })
    }

    /// Sends `text` as a plain-text message to `chat_id`.
    ///
    /// The text is sent verbatim, including when it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Delivery`] when the request fails or Telegram
    /// answers `ok: false` (chat not found, flood control, etc.).
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<SentMessage, NotifyError> {
        self.call("sendMessage", &SendMessageRequest { chat_id, text })
            .await
            .map_err(|reason| NotifyError::Delivery { chat_id, reason })
    }

    /// POSTs `body` to `method` and unwraps the `{ok, result}` envelope.
    ///
    /// Failures are flattened to a token-free reason string; the public
    /// methods decide which error kind it becomes.
    async fn call<T, B>(&self, method: &str, body: &B) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let envelope = serde_json::from_str::<ApiResponse<T>>(&text)
            .map_err(|e| format!("HTTP {status}: undecodable {method} response: {e}"))?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(match envelope.error_code {
                Some(code) => format!("{method} error {code}: {description}"),
                None => format!("{method} error (HTTP {status}): {description}"),
            });
        }

        envelope
            .result
            .ok_or_else(|| format!("{method} returned ok without a result"))
    }

    /// Builds `<base>/bot<token>/<method>`.
    fn method_url(&self, method: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&format!("bot{}", self.api_token))
                .push(method);
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
