pub mod client;
pub mod error;
pub mod format;
pub mod notifier;
pub mod types;

pub use client::TelegramClient;
pub use error::NotifyError;
pub use format::format_report;
pub use notifier::{TelegramNotifier, TelegramSettings};
pub use types::{BotUser, SentMessage};
