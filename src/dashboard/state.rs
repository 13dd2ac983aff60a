use std::collections::BTreeSet;

use crate::markets::{Currency, Timeframe};
use crate::sentiment::SentimentFilter;

/// The coins selected by default in a fresh session.
pub const DEFAULT_SELECTION: [&str; 5] = ["BTC", "ETH", "ADA", "DOGE", "BNB"];

/// Calculator inputs. Negative amounts are clamped to zero on the way in;
/// a zero value simply produces no result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcInputs {
    pub symbol: Option<String>,
    pub investment: f64,
    pub buy_price: f64,
}

/// All session-scoped input state for one dashboard.
///
/// One value per user session; dropped with the session, never persisted.
/// Every mutation is followed by a full re-render, so there is no
/// per-field dirty tracking.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub currency: Currency,
    pub timeframe: Timeframe,
    /// Selected coin symbols; an empty set means "show all".
    pub selected: BTreeSet<String>,
    pub sentiment_filter: SentimentFilter,
    /// Coin name for the news section; `None` falls back to the first
    /// listed asset.
    pub news_coin: Option<String>,
    pub calc: CalcInputs,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            timeframe: Timeframe::default(),
            selected: DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect(),
            sentiment_filter: SentimentFilter::default(),
            news_coin: None,
            calc: CalcInputs::default(),
        }
    }
}

impl DashboardState {
    /// Replace the coin selection.
    pub fn select_coins<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = symbols.into_iter().map(Into::into).collect();
    }

    /// Set the calculator inputs, clamping amounts at zero.
    pub fn set_calc(&mut self, symbol: impl Into<String>, investment: f64, buy_price: f64) {
        self.calc = CalcInputs {
            symbol: Some(symbol.into()),
            investment: investment.max(0.0),
            buy_price: buy_price.max(0.0),
        };
    }
}
