use crate::{
    core::{CacheMode, DashClient, DashError, net},
    markets::{
        model::{Asset, AssetTable, Currency},
        wire,
    },
};

const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

pub(super) async fn fetch_listings(
    client: &DashClient,
    currency: Currency,
    limit: u32,
    cache_mode: CacheMode,
) -> Result<AssetTable, DashError> {
    let mut url = client.base_listings().clone();
    url.query_pairs_mut()
        .append_pair("start", "1")
        .append_pair("limit", &limit.to_string())
        .append_pair("convert", currency.as_str());

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        return parse_listings_body(&body, currency);
    }

    let resp = client
        .http()
        .get(url.clone())
        .header(API_KEY_HEADER, client.config().market_api_key())
        .header("accept", "application/json")
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp).await?;
    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body).await;
    }
    parse_listings_body(&body, currency)
}

fn parse_listings_body(body: &str, currency: Currency) -> Result<AssetTable, DashError> {
    let envelope: wire::ListingsEnvelope = serde_json::from_str(body)?;
    let data = envelope
        .data
        .ok_or_else(|| DashError::Data("listings response has no `data` array".into()))?;

    let assets = data
        .into_iter()
        .filter_map(|raw| map_asset(raw, currency))
        .collect();
    Ok(AssetTable::new(assets))
}

/// A row without a name, symbol, slug, or a priced quote in the requested
/// currency is unusable and is dropped.
fn map_asset(raw: wire::WireAsset, currency: Currency) -> Option<Asset> {
    let name = raw.name?;
    let symbol = raw.symbol?;
    let slug = raw.slug?;
    let quote = raw.quote.get(currency.as_str())?;
    let price = quote.price?;

    Some(Asset {
        name,
        symbol,
        price,
        market_cap: quote.market_cap,
        volume_24h: quote.volume_24h,
        percent_change_1h: quote.percent_change_1h,
        percent_change_24h: quote.percent_change_24h,
        percent_change_7d: quote.percent_change_7d,
        max_supply: raw.max_supply,
        circulating_supply: raw.circulating_supply,
        link: format!("https://coinmarketcap.com/currencies/{slug}/"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_a_priced_quote_are_dropped() {
        let body = r#"{
            "data": [
                {
                    "name": "Bitcoin", "symbol": "BTC", "slug": "bitcoin",
                    "quote": { "USD": { "price": 50000.0, "market_cap": 1.0e12 } }
                },
                {
                    "name": "Ghost", "symbol": "GHT", "slug": "ghost",
                    "quote": { "USD": { "price": null } }
                },
                {
                    "name": "WrongCurrency", "symbol": "WC", "slug": "wc",
                    "quote": { "EUR": { "price": 1.0 } }
                }
            ]
        }"#;

        let table = parse_listings_body(body, Currency::Usd).unwrap();
        assert_eq!(table.symbols(), vec!["BTC"]);
        assert_eq!(
            table.assets()[0].link,
            "https://coinmarketcap.com/currencies/bitcoin/"
        );
    }

    #[test]
    fn missing_data_array_is_a_data_error() {
        let err = parse_listings_body(r#"{"status": {}}"#, Currency::Usd).unwrap_err();
        assert!(matches!(err, DashError::Data(_)));
    }
}
