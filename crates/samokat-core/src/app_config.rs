/// Root of the Samokat showcase API.
pub const DEFAULT_SHOWCASE_BASE_URL: &str = "https://api.samokat.ru/";

/// Root of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct AppConfig {
    /// Raw `TELEGRAM_APITOKEN`; empty when unset. Validated by the notifier.
    pub telegram_api_token: String,
    /// Raw `TELEGRAM_CHAT_ID`; empty when unset. Parsed by the notifier.
    pub telegram_chat_id: String,
    pub min_discount: i64,
    pub lat: f64,
    pub lon: f64,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub showcase_base_url: String,
    pub telegram_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "telegram_api_token",
                &(!self.telegram_api_token.is_empty()).then_some("[redacted]"),
            )
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("min_discount", &self.min_discount)
            .field("lat", &self.lat)
            .field("lon", &self.lon)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("showcase_base_url", &self.showcase_base_url)
            .field("telegram_base_url", &self.telegram_base_url)
            .finish()
    }
}
