use chrono::{DateTime, Utc};

use crate::{
    core::{DashClient, DashError, net},
    news::{model::Article, wire},
};

pub(super) async fn fetch_news(
    client: &DashClient,
    query: &str,
    count: u32,
) -> Result<Vec<Article>, DashError> {
    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("sortBy", "publishedAt")
        .append_pair("pageSize", &count.to_string())
        .append_pair("apiKey", client.config().news_api_key());

    // One page of ten small rows; not worth a cache entry.
    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    // A failed fetch is an error, distinguishable from a successful fetch
    // with zero matching articles.
    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp).await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;

    let articles = envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .filter_map(map_article)
        .collect();
    Ok(articles)
}

/// An item without a title or URL is not a renderable article and is dropped.
fn map_article(raw: wire::WireArticle) -> Option<Article> {
    let title = raw.title?;
    let url = raw.url?;

    let published_at = raw
        .published_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Some(Article {
        title,
        description: raw.description,
        url,
        source: raw.source.and_then(|s| s.name),
        published_at,
    })
}
