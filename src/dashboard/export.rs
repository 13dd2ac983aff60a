//! Downloadable exports: CSV of the filtered asset table and plain text of
//! the surviving news articles.

use crate::core::DashError;
use crate::markets::Asset;
use crate::sentiment::ScoredArticle;

/// Column order of the CSV export; matches [`Asset`]'s field order so rows
/// round-trip through serde.
const CSV_HEADER: [&str; 11] = [
    "name",
    "symbol",
    "price",
    "market_cap",
    "volume_24h",
    "percent_change_1h",
    "percent_change_24h",
    "percent_change_7d",
    "max_supply",
    "circulating_supply",
    "link",
];

/// Render the given (already filtered and sorted) assets as UTF-8 CSV:
/// a header row plus one row per asset, absent fields as empty cells.
///
/// # Errors
///
/// Returns a [`DashError`] if a row fails to serialize.
pub fn market_csv(assets: &[Asset]) -> Result<String, DashError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for asset in assets {
        wtr.serialize(asset)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DashError::Data(format!("CSV writer flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DashError::Data(format!("CSV not UTF-8: {e}")))
}

/// Render the surviving news articles as plain text: title, description,
/// and URL per article, records separated by a blank line.
pub fn news_txt(articles: &[ScoredArticle]) -> String {
    articles
        .iter()
        .map(|s| {
            format!(
                "{}\n{}\n{}",
                s.article.title,
                s.article.description.as_deref().unwrap_or(""),
                s.article.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
