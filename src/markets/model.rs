use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Quote currency for the listings request. The set matches the dashboard's
/// currency selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Btc,
    Eth,
}

impl Currency {
    /// The provider-facing currency code, also the key of the `quote` object
    /// in the listings response.
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        }
    }

    /// Every selectable currency, in selector order.
    pub fn all() -> &'static [Currency] {
        &[Currency::Usd, Currency::Inr, Currency::Btc, Currency::Eth]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percent-change window for the bar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    H1,
    H24,
    D7,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::H1 => "1h",
            Timeframe::H24 => "24h",
            Timeframe::D7 => "7d",
        }
    }

    /// Every selectable timeframe, in selector order.
    pub fn all() -> &'static [Timeframe] {
        &[Timeframe::H1, Timeframe::H24, Timeframe::D7]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One listed asset, quoted in the currency the table was fetched with.
///
/// Optional fields are absent when the provider omits them; formatting code
/// renders them blank rather than inventing zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_24h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    /// Canonical info-page link for the asset.
    pub link: String,
}

impl Asset {
    /// Percent change for the given timeframe.
    pub fn percent_change(&self, timeframe: Timeframe) -> Option<f64> {
        match timeframe {
            Timeframe::H1 => self.percent_change_1h,
            Timeframe::H24 => self.percent_change_24h,
            Timeframe::D7 => self.percent_change_7d,
        }
    }
}

/// An ordered collection of [`Asset`]s, in provider response order until
/// explicitly re-sorted for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetTable {
    assets: Vec<Asset>,
}

impl AssetTable {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The symbols in table order.
    pub fn symbols(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.symbol.clone()).collect()
    }

    /// The display names in table order.
    pub fn names(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.name.clone()).collect()
    }

    /// The subset whose symbol is in `selection`, preserving table order.
    /// An empty selection selects everything.
    pub fn filter(&self, selection: &BTreeSet<String>) -> AssetTable {
        if selection.is_empty() {
            return self.clone();
        }
        AssetTable {
            assets: self
                .assets
                .iter()
                .filter(|a| selection.contains(&a.symbol))
                .cloned()
                .collect(),
        }
    }

    /// A copy sorted descending by market cap; assets with no market cap
    /// sort last.
    pub fn sorted_by_market_cap_desc(&self) -> AssetTable {
        let mut assets = self.assets.clone();
        assets.sort_by(|a, b| {
            let ka = a.market_cap.unwrap_or(f64::NEG_INFINITY);
            let kb = b.market_cap.unwrap_or(f64::NEG_INFINITY);
            kb.partial_cmp(&ka).unwrap_or(std::cmp::Ordering::Equal)
        });
        AssetTable { assets }
    }

    /// Latest price for `symbol`, if it is present in this table.
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.assets
            .iter()
            .find(|a| a.symbol == symbol)
            .map(|a| a.price)
    }

    /// Look up an asset by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

impl IntoIterator for AssetTable {
    type Item = Asset;
    type IntoIter = std::vec::IntoIter<Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.into_iter()
    }
}
