//! Pure chart computations: pie shares, bar coloring, and the correlation
//! heatmap. Everything here is a function of the filtered asset slice only.

use serde::Serialize;

use crate::markets::{Asset, Timeframe};

/// Bar fill for the percent-change chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarColor {
    Green,
    Red,
}

impl BarColor {
    /// Green iff the change is strictly positive; zero, negative, and absent
    /// values all take the red branch.
    pub fn from_value(value: Option<f64>) -> Self {
        match value {
            Some(v) if v > 0.0 => BarColor::Green,
            _ => BarColor::Red,
        }
    }
}

/// One bar of the percent-change chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub symbol: String,
    pub value: Option<f64>,
    pub color: BarColor,
}

/// Percent-change bar chart for the selected timeframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub timeframe: Timeframe,
    pub bars: Vec<Bar>,
}

/// One slice of the market-cap pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub symbol: String,
    pub market_cap: f64,
    /// Share of the filtered set's total market cap, in percent.
    pub share_pct: f64,
}

/// Market-cap share across the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// Row/column labels of the correlation heatmap, in matrix order.
pub const HEATMAP_LABELS: [&str; 4] = ["price", "% change 1h", "% change 24h", "% change 7d"];

/// Pearson correlation matrix over {price, %1h, %24h, %7d}.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub labels: [&'static str; 4],
    pub matrix: [[f64; 4]; 4],
}

pub(crate) fn bar_chart(assets: &[Asset], timeframe: Timeframe) -> BarChart {
    let bars = assets
        .iter()
        .map(|a| {
            let value = a.percent_change(timeframe);
            Bar {
                symbol: a.symbol.clone(),
                value,
                color: BarColor::from_value(value),
            }
        })
        .collect();
    BarChart { timeframe, bars }
}

/// `None` iff the filtered set is empty. Assets with no market cap
/// contribute no slice.
pub(crate) fn pie_chart(assets: &[Asset]) -> Option<PieChart> {
    if assets.is_empty() {
        return None;
    }
    let total: f64 = assets.iter().filter_map(|a| a.market_cap).sum();
    let slices = assets
        .iter()
        .filter_map(|a| {
            let market_cap = a.market_cap?;
            Some(PieSlice {
                symbol: a.symbol.clone(),
                market_cap,
                share_pct: if total > 0.0 {
                    market_cap / total * 100.0
                } else {
                    0.0
                },
            })
        })
        .collect();
    Some(PieChart { slices })
}

/// `None` unless there is more than one row; a 1x1 or empty correlation is
/// meaningless.
pub(crate) fn correlation_heatmap(assets: &[Asset]) -> Option<Heatmap> {
    if assets.len() < 2 {
        return None;
    }

    let series: [Vec<Option<f64>>; 4] = [
        assets.iter().map(|a| Some(a.price)).collect(),
        assets.iter().map(|a| a.percent_change_1h).collect(),
        assets.iter().map(|a| a.percent_change_24h).collect(),
        assets.iter().map(|a| a.percent_change_7d).collect(),
    ];

    let mut matrix = [[f64::NAN; 4]; 4];
    for (i, xs) in series.iter().enumerate() {
        for (j, ys) in series.iter().enumerate() {
            matrix[i][j] = if i == j { 1.0 } else { pearson(xs, ys) };
        }
    }
    Some(Heatmap {
        labels: HEATMAP_LABELS,
        matrix,
    })
}

/// Pearson correlation over pairwise-complete observations. Fewer than two
/// complete pairs, or a zero-variance series, yields NaN.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}
