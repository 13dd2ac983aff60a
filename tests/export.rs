use coindash::dashboard::{market_csv, news_txt};
use coindash::{Article, Asset, ScoredArticle, SentimentLabel};

fn asset(symbol: &str, price: f64, max_supply: Option<f64>) -> Asset {
    Asset {
        name: format!("{symbol} Coin"),
        symbol: symbol.to_string(),
        price,
        market_cap: Some(price * 1.0e6),
        volume_24h: Some(price * 2.0e4),
        percent_change_1h: Some(0.123_456_789),
        percent_change_24h: Some(-2.5),
        percent_change_7d: None,
        max_supply,
        circulating_supply: Some(19_000_000.0),
        link: format!("https://coinmarketcap.com/currencies/{}/", symbol.to_lowercase()),
    }
}

#[test]
fn csv_has_header_plus_one_line_per_asset() {
    let assets = vec![
        asset("BTC", 50_000.0, Some(21_000_000.0)),
        asset("ETH", 3_000.0, None),
        asset("ADA", 0.5, Some(45_000_000_000.0)),
    ];
    let csv = market_csv(&assets).unwrap();
    assert_eq!(csv.lines().count(), assets.len() + 1);
}

#[test]
fn csv_round_trips_every_field() {
    let assets = vec![
        asset("BTC", 50_000.123, Some(21_000_000.0)),
        asset("ETH", 3_000.456, None),
    ];
    let csv = market_csv(&assets).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let parsed: Vec<Asset> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("exported CSV must re-parse");

    assert_eq!(parsed, assets);
}

#[test]
fn csv_renders_absent_fields_as_empty_cells() {
    let csv = market_csv(&[asset("ETH", 3_000.0, None)]).unwrap();
    let row = csv.lines().nth(1).unwrap();
    // max_supply sits between percent_change_7d (also empty) and
    // circulating_supply.
    assert!(row.contains(",,,19000000"), "row was: {row}");
}

#[test]
fn news_txt_formats_title_description_url() {
    let articles = vec![ScoredArticle {
        article: Article {
            title: "Bitcoin climbs".into(),
            description: Some("A strong session".into()),
            url: "https://news.example.com/bitcoin-climbs".into(),
            source: Some("Example Wire".into()),
            published_at: None,
        },
        polarity: 0.4,
        label: SentimentLabel::Positive,
    }];

    let txt = news_txt(&articles);
    assert_eq!(
        txt,
        "Bitcoin climbs\nA strong session\nhttps://news.example.com/bitcoin-climbs"
    );
}
