//! Telegram Bot API envelope and the few result types we read.
//!
//! Every method answers `{"ok": bool, "result": ..., "description": ...}`.
//! Failures (401 bad token, 400 chat not found, 429 flood control) still
//! carry a JSON body with `ok: false`, so the envelope is decoded regardless
//! of HTTP status.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

/// The bot account returned by `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    pub username: Option<String>,
}

impl BotUser {
    /// The bot's username (without a leading `@`) when set, otherwise its
    /// first name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

/// The subset of `Message` we care about after `sendMessage`.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}
