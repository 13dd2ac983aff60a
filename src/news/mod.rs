mod api;
mod model;
mod wire;

pub use model::Article;

use crate::core::{DashClient, DashError};

/// The provider page size: up to this many most-recent articles per query.
pub const DEFAULT_NEWS_COUNT: u32 = 10;

/// Fetch the most recent articles mentioning `query` with default settings.
///
/// # Errors
///
/// Returns a [`DashError`] if the request fails, the provider responds with a
/// non-success status, or the response body cannot be parsed.
pub async fn news(client: &DashClient, query: &str) -> Result<Vec<Article>, DashError> {
    NewsBuilder::new(client, query).fetch().await
}

/// A builder for fetching recent news articles for a free-text query
/// (a coin's display name).
#[derive(Debug)]
pub struct NewsBuilder {
    client: DashClient,
    query: String,
    count: u32,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given query.
    pub fn new(client: &DashClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            count: DEFAULT_NEWS_COUNT,
        }
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Executes the request and fetches the articles, most recent first.
    ///
    /// A successful response with no matching articles yields an empty list;
    /// a non-success status is an error, never an empty list.
    ///
    /// # Errors
    ///
    /// Returns a [`DashError`] if the request fails, the provider responds
    /// with a non-success status, or the response body cannot be parsed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(query = %self.query))
    )]
    pub async fn fetch(self) -> Result<Vec<Article>, DashError> {
        api::fetch_news(&self.client, &self.query, self.count).await
    }
}
