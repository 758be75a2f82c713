use samokat_core::ConfigError;
use thiserror::Error;

/// Errors returned while delivering a report through the Telegram Bot API.
///
/// Reasons never contain the bot token: transport errors are stripped of
/// their request URL before being stored.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// `getMe` failed or the token was rejected.
    #[error("telegram authorization failed: {reason}")]
    Auth { reason: String },

    /// `sendMessage` failed: network, rate limit, unknown chat, etc.
    #[error("telegram delivery to chat {chat_id} failed: {reason}")]
    Delivery { chat_id: i64, reason: String },
}
