//! coindash: client library for a live cryptocurrency dashboard.
//!
//! The crate talks to two upstream HTTP APIs — a CoinMarketCap-style
//! listings endpoint and a NewsAPI-style article search — scores article
//! sentiment with a lexicon-based analyzer, and turns an explicit session
//! state into a typed, chart-ready [`DashboardView`].
//!
//! ```no_run
//! use coindash::{Config, DashClient, Dashboard, DashboardState};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), coindash::DashError> {
//! let config = Config::from_env()?;
//! let client = DashClient::builder().config(config).build()?;
//!
//! let dashboard = Dashboard::new(&client, DashboardState::default());
//! let view = dashboard.render().await;
//! println!("{} assets listed", view.market.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod calc;
pub mod core;
pub mod dashboard;
pub mod markets;
pub mod news;
pub mod sentiment;

pub use crate::core::client::{CacheMode, DashClient, DashClientBuilder};
pub use crate::core::config::Config;
pub use crate::core::error::DashError;
pub use calc::{ProfitEstimate, estimate};
pub use dashboard::{
    Bar, BarChart, BarColor, CalcInputs, CalcPanel, Dashboard, DashboardState, DashboardView,
    Heatmap, MarketPanel, NewsPanel, PieChart, PieSlice, SourceStatus, TokenomicsRow,
};
pub use markets::{Asset, AssetTable, Currency, ListingsBuilder, Timeframe};
pub use news::{Article, NewsBuilder};
pub use sentiment::{Classifier, ScoredArticle, SentimentFilter, SentimentLabel};
