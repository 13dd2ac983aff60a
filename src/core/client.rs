//! Public client surface + builder.
//!
//! One `DashClient` is shared by every fetcher: it owns the HTTP client, the
//! two upstream base URLs, the API keys, and a small in-memory response cache
//! with a time-to-live, keyed by the full request URL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::core::{Config, DashError};

const DEFAULT_BASE_LISTINGS: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest";
const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

const USER_AGENT: &str = concat!("coindash/", env!("CARGO_PKG_VERSION"));

/// Default TTL for cached listings responses.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(600);
/// Default overall request timeout. The upstream default is unbounded; a
/// bounded dashboard render requires a bounded fetch.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How a fetch interacts with the client's response cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise fetch
    /// from the network and write the response to the cache. (Default)
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write
    /// the new response to the cache. The dashboard's refresh button maps to
    /// this mode.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Shared HTTP client for the market-data and news providers.
///
/// Cloning is cheap; clones share the same cache, so a process-wide client
/// can back many independent dashboard sessions.
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_listings: Url,
    base_news: Url,
    config: Config,
    cache: Arc<CacheStore>,
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /* -------- internal getters used by the fetcher modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_listings(&self) -> &Url {
        &self.base_listings
    }

    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Drop every cached response. Explicit invalidation for the refresh
    /// action; per-call behavior is controlled by [`CacheMode`].
    pub async fn cache_clear(&self) {
        self.cache.map.write().await.clear();
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let guard = self.cache.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str) {
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + self.cache.default_ttl,
        };
        let mut guard = self.cache.map.write().await;
        guard.insert(url.as_str().to_string(), entry);
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`DashClient`].
#[derive(Default)]
pub struct DashClientBuilder {
    config: Option<Config>,
    user_agent: Option<String>,
    base_listings: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl DashClientBuilder {
    /// Set the API credentials. Required.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the listings endpoint base URL (useful for tests).
    #[must_use]
    pub fn base_listings(mut self, url: Url) -> Self {
        self.base_listings = Some(url);
        self
    }

    /// Override the news search endpoint base URL (useful for tests).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 10 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the cache time-to-live. Default: 600 seconds.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Config`] if no [`Config`] was provided, and
    /// propagates URL-parse or HTTP-client construction failures.
    pub fn build(self) -> Result<DashClient, DashError> {
        let config = self
            .config
            .ok_or_else(|| DashError::Config("no API credentials supplied to builder".into()))?;

        let base_listings = match self.base_listings {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_LISTINGS)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let http = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(DashClient {
            http,
            base_listings,
            base_news,
            config,
            cache: Arc::new(CacheStore {
                map: RwLock::new(HashMap::new()),
                default_ttl: self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_ttl(ttl: Duration) -> DashClient {
        DashClient::builder()
            .config(Config::new("k1", "k2"))
            .cache_ttl(ttl)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn cache_round_trips_within_ttl() {
        let client = client_with_ttl(Duration::from_secs(60));
        let url = Url::parse("https://example.com/a?x=1").unwrap();

        assert_eq!(client.cache_get(&url).await, None);
        client.cache_put(&url, "body").await;
        assert_eq!(client.cache_get(&url).await.as_deref(), Some("body"));
    }

    #[tokio::test]
    async fn expired_entries_are_not_served() {
        let client = client_with_ttl(Duration::ZERO);
        let url = Url::parse("https://example.com/a").unwrap();

        client.cache_put(&url, "body").await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(client.cache_get(&url).await, None);
    }

    #[tokio::test]
    async fn clear_drops_all_entries() {
        let client = client_with_ttl(Duration::from_secs(60));
        let url = Url::parse("https://example.com/a").unwrap();

        client.cache_put(&url, "body").await;
        client.cache_clear().await;
        assert_eq!(client.cache_get(&url).await, None);
    }

    #[test]
    fn builder_without_config_fails() {
        let err = DashClient::builder().build().unwrap_err();
        assert!(matches!(err, DashError::Config(_)));
    }
}
