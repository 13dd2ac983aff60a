use std::env;

use crate::core::DashError;

/// Environment variable holding the market-data provider API key.
pub const MARKET_API_KEY_VAR: &str = "COINMARKETCAP_API_KEY";
/// Environment variable holding the news provider API key.
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";

/// Upstream API credentials, constructed once at startup and handed to the
/// client builder. Nothing else in the crate reads the process environment.
#[derive(Clone)]
pub struct Config {
    market_api_key: String,
    news_api_key: String,
}

// Keys stay out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("market_api_key", &"<redacted>")
            .field("news_api_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Build a configuration from explicit key values.
    pub fn new(market_api_key: impl Into<String>, news_api_key: impl Into<String>) -> Self {
        Self {
            market_api_key: market_api_key.into(),
            news_api_key: news_api_key.into(),
        }
    }

    /// Load both API keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Config`] naming the offending variable when it is
    /// unset or empty, so a misconfigured deployment fails at startup rather
    /// than deep inside a request.
    pub fn from_env() -> Result<Self, DashError> {
        Ok(Self {
            market_api_key: require_var(MARKET_API_KEY_VAR, env::var(MARKET_API_KEY_VAR).ok())?,
            news_api_key: require_var(NEWS_API_KEY_VAR, env::var(NEWS_API_KEY_VAR).ok())?,
        })
    }

    pub(crate) fn market_api_key(&self) -> &str {
        &self.market_api_key
    }

    pub(crate) fn news_api_key(&self) -> &str {
        &self.news_api_key
    }
}

fn require_var(name: &str, value: Option<String>) -> Result<String, DashError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DashError::Config(format!(
            "missing required environment variable {name}"
        ))),
    }
}
