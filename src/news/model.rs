use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single news article returned for a coin query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// The snippet the provider returned; sentiment is scored on this text.
    pub description: Option<String>,
    /// A direct link to the article. Effectively unique per query.
    pub url: String,
    /// The publisher of the article (e.g. "Reuters").
    pub source: Option<String>,
    /// Publication time, when the provider's timestamp parses.
    pub published_at: Option<DateTime<Utc>>,
}
