use serde::Serialize;

use crate::calc::ProfitEstimate;
use crate::dashboard::charts::{BarChart, Heatmap, PieChart};
use crate::markets::{Asset, AssetTable};
use crate::sentiment::ScoredArticle;

/// Whether an upstream source answered this render.
///
/// "Unavailable" is always distinguishable from a successful fetch with no
/// results; the two are never conflated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SourceStatus {
    Ok,
    Unavailable(String),
}

/// The market overview table: the filtered view, sorted descending by
/// market cap. On fetch failure `rows` is empty and `status` carries the
/// user-visible message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPanel {
    pub status: SourceStatus,
    pub rows: AssetTable,
}

/// Supply metadata row for the tokenomics sub-table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenomicsRow {
    pub name: String,
    pub symbol: String,
    pub max_supply: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub link: String,
}

impl From<&Asset> for TokenomicsRow {
    fn from(a: &Asset) -> Self {
        Self {
            name: a.name.clone(),
            symbol: a.symbol.clone(),
            max_supply: a.max_supply,
            circulating_supply: a.circulating_supply,
            link: a.link.clone(),
        }
    }
}

/// The news section for the chosen coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NewsPanel {
    /// The news fetch failed; carries the user-visible message.
    Unavailable(String),
    /// The fetch succeeded but annotation plus the sentiment filter left
    /// nothing to show.
    NoMatches,
    /// Surviving articles in fetch order, with the polarity trend line
    /// (one point per surviving article, same order).
    Articles {
        articles: Vec<ScoredArticle>,
        trend: Vec<f64>,
    },
}

/// The profit calculator output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CalcPanel {
    /// No coin chosen, or inputs not both strictly positive: nothing to show.
    Idle,
    /// The chosen symbol has no row in the latest table. Recoverable, not
    /// a crash.
    PriceUnavailable { symbol: String },
    Result {
        symbol: String,
        estimate: ProfitEstimate,
    },
}

/// One full top-to-bottom render, panels in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub market: MarketPanel,
    /// `None` iff the filtered set is empty.
    pub pie: Option<PieChart>,
    pub bars: BarChart,
    /// `None` unless the filtered set has more than one row.
    pub heatmap: Option<Heatmap>,
    pub tokenomics: Vec<TokenomicsRow>,
    pub news: NewsPanel,
    pub calculator: CalcPanel,
}
