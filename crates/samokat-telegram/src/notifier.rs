//! Report delivery: validated settings plus the authorize-then-send flow.

use samokat_core::{AppConfig, ConfigError};

use crate::client::TelegramClient;
use crate::error::NotifyError;
use crate::types::SentMessage;

/// Bot token and destination chat, validated before any request is made.
#[derive(Clone)]
pub struct TelegramSettings {
    api_token: String,
    chat_id: i64,
}

impl std::fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("api_token", &"[redacted]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramSettings {
    /// Validates a raw token and chat id, token first.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEnvVar`] if either value is empty.
    /// - [`ConfigError::InvalidEnvVar`] if `chat_id` is not a decimal `i64`.
    pub fn new(api_token: &str, chat_id: &str) -> Result<Self, ConfigError> {
        if api_token.is_empty() {
            return Err(ConfigError::MissingEnvVar("TELEGRAM_APITOKEN".to_string()));
        }
        if chat_id.is_empty() {
            return Err(ConfigError::MissingEnvVar("TELEGRAM_CHAT_ID".to_string()));
        }
        let chat_id = chat_id
            .parse::<i64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: "TELEGRAM_CHAT_ID".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_token: api_token.to_owned(),
            chat_id,
        })
    }

    /// # Errors
    ///
    /// See [`TelegramSettings::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::new(&config.telegram_api_token, &config.telegram_chat_id)
    }

    #[must_use]
    pub fn chat_id(&self) -> i64 {
        self.chat_id
    }
}

/// Delivers a finished report to one chat.
#[derive(Debug)]
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: i64,
}

impl TelegramNotifier {
    /// Validates the Telegram settings in `config` and builds a notifier
    /// against `config.telegram_base_url`.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Config`] for a missing token, missing or malformed
    ///   chat id, or an invalid base URL.
    /// - [`NotifyError::Client`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, NotifyError> {
        let settings = TelegramSettings::from_app_config(config)?;
        Self::with_base_url(
            &settings,
            config.request_timeout_secs,
            &config.user_agent,
            &config.telegram_base_url,
        )
    }

    /// # Errors
    ///
    /// See [`TelegramClient::with_base_url`].
    pub fn with_base_url(
        settings: &TelegramSettings,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NotifyError> {
        let client =
            TelegramClient::with_base_url(&settings.api_token, timeout_secs, user_agent, base_url)?;
        Ok(Self {
            client,
            chat_id: settings.chat_id,
        })
    }

    /// Authorizes the bot, then sends `text` as a single message.
    ///
    /// An empty `text` is still sent.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::Auth`] if `getMe` fails; nothing is sent.
    /// - [`NotifyError::Delivery`] if `sendMessage` fails.
    pub async fn notify(&self, text: &str) -> Result<SentMessage, NotifyError> {
        let bot = self.client.get_me().await?;
        tracing::info!(bot = bot.display_name(), "authorized on bot account");

        let sent = self.client.send_message(self.chat_id, text).await?;
        tracing::info!(
            chat_id = self.chat_id,
            message_id = sent.message_id,
            bytes = text.len(),
            "report delivered"
        );
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_parse_negative_group_chat_id() {
        let settings = TelegramSettings::new("tok", "-1001234567890").unwrap();
        assert_eq!(settings.chat_id(), -1_001_234_567_890);
    }

    #[test]
    fn settings_reject_empty_token_before_chat_id() {
        let err = TelegramSettings::new("", "").unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("TELEGRAM_APITOKEN".to_string()));
    }

    #[test]
    fn settings_reject_empty_chat_id() {
        let err = TelegramSettings::new("tok", "").unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("TELEGRAM_CHAT_ID".to_string()));
    }

    #[test]
    fn settings_reject_non_numeric_chat_id() {
        let err = TelegramSettings::new("tok", "@my_channel").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TELEGRAM_CHAT_ID"),
            "expected InvalidEnvVar(TELEGRAM_CHAT_ID), got: {err:?}"
        );
    }

    #[test]
    fn settings_reject_chat_id_overflowing_i64() {
        assert!(TelegramSettings::new("tok", "99999999999999999999").is_err());
    }

    #[test]
    fn settings_debug_redacts_token() {
        let settings = TelegramSettings::new("secret-token", "42").unwrap();
        assert!(!format!("{settings:?}").contains("secret-token"));
    }
}
