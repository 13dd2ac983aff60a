use httpmock::MockServer;
use serde_json::{Value, json};
use url::Url;

use coindash::{Config, DashClient};

pub const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";
pub const NEWS_PATH: &str = "/v2/everything";

pub const MARKET_KEY: &str = "test-market-key";
pub const NEWS_KEY: &str = "test-news-key";

/// A client whose listings and news bases both point at the mock server.
pub fn client_for(server: &MockServer) -> DashClient {
    let base = Url::parse(&server.base_url()).unwrap();
    DashClient::builder()
        .config(Config::new(MARKET_KEY, NEWS_KEY))
        .base_listings(base.join(LISTINGS_PATH).unwrap())
        .base_news(base.join(NEWS_PATH).unwrap())
        .build()
        .unwrap()
}

/// One asset object in the provider's listings shape, quoted in USD.
pub fn listing(name: &str, symbol: &str, price: f64, market_cap: f64, change_1h: f64) -> Value {
    json!({
        "name": name,
        "symbol": symbol,
        "slug": name.to_lowercase().replace(' ', "-"),
        "max_supply": 21_000_000.0,
        "circulating_supply": 19_000_000.0,
        "quote": {
            "USD": {
                "price": price,
                "market_cap": market_cap,
                "volume_24h": market_cap / 50.0,
                "percent_change_1h": change_1h,
                "percent_change_24h": change_1h * 2.0,
                "percent_change_7d": change_1h * 3.0
            }
        }
    })
}

/// A listings body with the five default coins plus one unselected extra.
pub fn default_listings_body() -> String {
    json!({
        "data": [
            listing("Bitcoin", "BTC", 50_000.0, 1.0e12, 0.5),
            listing("Ethereum", "ETH", 3_000.0, 4.0e11, -1.2),
            listing("Cardano", "ADA", 0.5, 2.0e10, 0.0),
            listing("Dogecoin", "DOGE", 0.1, 1.5e10, 2.5),
            listing("BNB", "BNB", 400.0, 6.0e10, -0.3),
            listing("Solana", "SOL", 150.0, 7.0e10, 1.1)
        ]
    })
    .to_string()
}

/// One article object in the provider's response shape.
pub fn news_article(title: &str, description: Option<&str>) -> Value {
    json!({
        "title": title,
        "description": description,
        "url": format!("https://news.example.com/{}", title.to_lowercase().replace(' ', "-")),
        "source": { "name": "Example Wire" },
        "publishedAt": "2024-05-01T12:00:00Z"
    })
}

pub fn news_body(articles: Vec<Value>) -> String {
    json!({ "status": "ok", "articles": articles }).to_string()
}
