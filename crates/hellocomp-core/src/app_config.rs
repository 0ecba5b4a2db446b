use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Origin of the Heureka product export used by the `feed` command.
    pub feed_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Default location of the semicolon-delimited inventory CSV consumed
    /// by the content generators.
    pub inventory_csv: PathBuf,
    pub log_level: String,
    /// Google Gemini API key. When absent the generators run in
    /// deterministic template mode.
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("feed_url", &self.feed_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inventory_csv", &self.inventory_csv)
            .field("log_level", &self.log_level)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_model", &self.gemini_model)
            .finish()
    }
}
