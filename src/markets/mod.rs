mod api;
mod model;
mod wire;

pub use model::{Asset, AssetTable, Currency, Timeframe};

use crate::core::{CacheMode, DashClient, DashError};

/// The provider's listings page size, and the most rows a dashboard shows.
pub const DEFAULT_LISTINGS_LIMIT: u32 = 100;

/// Fetch the top-ranked listings quoted in `currency` with default settings.
///
/// # Errors
///
/// Returns a [`DashError`] if the request fails, the provider responds with a
/// non-success status, or the response body cannot be parsed.
pub async fn listings(client: &DashClient, currency: Currency) -> Result<AssetTable, DashError> {
    ListingsBuilder::new(client).currency(currency).fetch().await
}

/// A builder for fetching the top-ranked asset listings.
#[derive(Debug)]
pub struct ListingsBuilder {
    client: DashClient,
    currency: Currency,
    limit: u32,
    cache_mode: CacheMode,
}

impl ListingsBuilder {
    /// Creates a new `ListingsBuilder` against the client's listings endpoint.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            currency: Currency::default(),
            limit: DEFAULT_LISTINGS_LIMIT,
            cache_mode: CacheMode::Use,
        }
    }

    /// Sets the quote currency.
    #[must_use]
    pub const fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the maximum number of assets to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Executes the request and fetches the asset table.
    ///
    /// One attempt per fetch; there is no retry logic. A cached response is
    /// served instead when [`CacheMode::Use`] finds a non-expired entry for
    /// the same effective request parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`DashError`] if the request fails, the provider responds
    /// with a non-success status, or the response body cannot be parsed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(currency = %self.currency, limit = self.limit))
    )]
    pub async fn fetch(self) -> Result<AssetTable, DashError> {
        api::fetch_listings(&self.client, self.currency, self.limit, self.cache_mode).await
    }
}
