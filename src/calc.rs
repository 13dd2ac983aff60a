//! Profit calculator: a pure function of the user's inputs and the latest
//! fetched price.

use serde::Serialize;

/// Result of a profit estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitEstimate {
    /// Units bought: `investment / buy_price`.
    pub units: f64,
    /// Profit or loss at the current price: `units * (current_price - buy_price)`.
    pub profit: f64,
    /// The price the estimate was computed against.
    pub current_price: f64,
}

/// Estimate profit/loss for a position.
///
/// Returns `None` unless both `investment` and `buy_price` are strictly
/// positive; non-positive inputs produce no result rather than a division
/// by zero.
pub fn estimate(investment: f64, buy_price: f64, current_price: f64) -> Option<ProfitEstimate> {
    if investment <= 0.0 || buy_price <= 0.0 {
        return None;
    }
    let units = investment / buy_price;
    Some(ProfitEstimate {
        units,
        profit: units * (current_price - buy_price),
        current_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gains_are_computed_from_units() {
        let est = estimate(1000.0, 100.0, 150.0).unwrap();
        assert_eq!(est.units, 10.0);
        assert_eq!(est.profit, 500.0);
        assert_eq!(est.current_price, 150.0);
    }

    #[test]
    fn losses_are_negative() {
        let est = estimate(1000.0, 100.0, 80.0).unwrap();
        assert_eq!(est.profit, -200.0);
    }

    #[test]
    fn non_positive_inputs_produce_no_result() {
        assert_eq!(estimate(0.0, 100.0, 150.0), None);
        assert_eq!(estimate(1000.0, 0.0, 150.0), None);
        assert_eq!(estimate(-5.0, 100.0, 150.0), None);
        assert_eq!(estimate(1000.0, -1.0, 150.0), None);
    }
}
