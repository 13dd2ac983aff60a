//! The presentation layer: an explicit session state plus a pure render.
//!
//! `render` recomputes every panel from scratch on each call — the
//! level-triggered model of the UI. There is no dependency tracking; the
//! data is bounded by one page of listings, so a full recomputation is
//! cheaper than being clever.

pub mod charts;
mod export;
mod state;
mod view;

pub use charts::{Bar, BarChart, BarColor, Heatmap, PieChart, PieSlice};
pub use export::{market_csv, news_txt};
pub use state::{CalcInputs, DEFAULT_SELECTION, DashboardState};
pub use view::{CalcPanel, DashboardView, MarketPanel, NewsPanel, SourceStatus, TokenomicsRow};

use crate::{
    calc,
    core::{CacheMode, DashClient},
    markets::{AssetTable, ListingsBuilder},
    news::NewsBuilder,
    sentiment::Classifier,
};

/// One user session: the shared client, a sentiment classifier, and the
/// session's input state.
///
/// ```no_run
/// # use coindash::{Config, DashClient, Dashboard, DashboardState};
/// # #[tokio::main]
/// # async fn main() -> Result<(), coindash::DashError> {
/// let client = DashClient::builder().config(Config::from_env()?).build()?;
/// let mut dashboard = Dashboard::new(&client, DashboardState::default());
///
/// dashboard.state_mut().select_coins(["BTC", "ETH"]);
/// let view = dashboard.render().await;
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    client: DashClient,
    classifier: Classifier,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(client: &DashClient, state: DashboardState) -> Self {
        Self {
            client: client.clone(),
            classifier: Classifier::new(),
            state,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Mutable access to the session state. The caller re-renders after
    /// mutating; nothing is recomputed implicitly.
    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Full top-to-bottom render, serving listings from cache within the TTL.
    ///
    /// Never fails: upstream errors degrade into `Unavailable` panel states.
    pub async fn render(&self) -> DashboardView {
        self.render_with(CacheMode::Use).await
    }

    /// The refresh button: forces a new listings fetch regardless of the
    /// remaining TTL, then renders.
    pub async fn refresh_and_render(&self) -> DashboardView {
        self.render_with(CacheMode::Refresh).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    async fn render_with(&self, cache_mode: CacheMode) -> DashboardView {
        let (status, table) = match ListingsBuilder::new(&self.client)
            .currency(self.state.currency)
            .cache_mode(cache_mode)
            .fetch()
            .await
        {
            Ok(table) => (SourceStatus::Ok, table),
            Err(e) => (SourceStatus::Unavailable(e.to_string()), AssetTable::default()),
        };

        let filtered = table.filter(&self.state.selected);

        DashboardView {
            market: MarketPanel {
                status,
                rows: filtered.sorted_by_market_cap_desc(),
            },
            pie: charts::pie_chart(filtered.assets()),
            bars: charts::bar_chart(filtered.assets(), self.state.timeframe),
            heatmap: charts::correlation_heatmap(filtered.assets()),
            tokenomics: filtered.assets().iter().map(TokenomicsRow::from).collect(),
            news: self.news_panel(&table).await,
            calculator: self.calc_panel(&table),
        }
    }

    async fn news_panel(&self, table: &AssetTable) -> NewsPanel {
        // The selector defaults to the first listed coin, like the table it
        // is fed from.
        let coin = match self
            .state
            .news_coin
            .clone()
            .or_else(|| table.names().first().cloned())
        {
            Some(coin) => coin,
            None => return NewsPanel::NoMatches,
        };

        let articles = match NewsBuilder::new(&self.client, coin).fetch().await {
            Ok(articles) => articles,
            Err(e) => return NewsPanel::Unavailable(e.to_string()),
        };

        let surviving = self
            .state
            .sentiment_filter
            .apply(self.classifier.annotate(articles));
        if surviving.is_empty() {
            return NewsPanel::NoMatches;
        }

        let trend = surviving.iter().map(|a| a.polarity).collect();
        NewsPanel::Articles {
            articles: surviving,
            trend,
        }
    }

    fn calc_panel(&self, table: &AssetTable) -> CalcPanel {
        let inputs = &self.state.calc;
        let Some(symbol) = inputs.symbol.clone() else {
            return CalcPanel::Idle;
        };

        let Some(current_price) = table.price_of(&symbol) else {
            return CalcPanel::PriceUnavailable { symbol };
        };

        match calc::estimate(inputs.investment, inputs.buy_price, current_price) {
            Some(estimate) => CalcPanel::Result { symbol, estimate },
            None => CalcPanel::Idle,
        }
    }
}
