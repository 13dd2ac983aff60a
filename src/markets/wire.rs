use std::collections::HashMap;

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ListingsEnvelope {
    pub(crate) data: Option<Vec<WireAsset>>,
}

#[derive(Deserialize)]
pub(crate) struct WireAsset {
    pub(crate) name: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) slug: Option<String>,
    #[serde(default)]
    pub(crate) max_supply: Option<f64>,
    #[serde(default)]
    pub(crate) circulating_supply: Option<f64>,
    /// Keyed by the currency code the listing was converted to.
    #[serde(default)]
    pub(crate) quote: HashMap<String, WireQuote>,
}

#[derive(Deserialize)]
pub(crate) struct WireQuote {
    #[serde(default)]
    pub(crate) price: Option<f64>,
    #[serde(default)]
    pub(crate) market_cap: Option<f64>,
    #[serde(default)]
    pub(crate) volume_24h: Option<f64>,
    #[serde(default)]
    pub(crate) percent_change_1h: Option<f64>,
    #[serde(default)]
    pub(crate) percent_change_24h: Option<f64>,
    #[serde(default)]
    pub(crate) percent_change_7d: Option<f64>,
}
