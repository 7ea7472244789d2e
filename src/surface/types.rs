use crate::error::{validate_finite, validate_positive, Result};
use crate::models::utils::clamp_non_negative;

/// The five Black-Scholes inputs for a single evaluation.
///
/// Fields are public so callers opting into
/// [`ValidationPolicy::Propagate`](crate::ValidationPolicy::Propagate) can
/// build values outside the model's domain; [`PricingParameters::new`] is the
/// validating constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParameters {
    /// Time to maturity in years
    pub time_to_maturity: f64,
    /// Strike price
    pub strike: f64,
    /// Underlying spot price
    pub spot: f64,
    /// Implied volatility (as decimal, e.g., 0.2 for 20%)
    pub volatility: f64,
    /// Continuously-compounded risk-free rate
    pub risk_free_rate: f64,
}

impl PricingParameters {
    /// Creates a validated parameter set.
    pub fn new(
        time_to_maturity: f64,
        strike: f64,
        spot: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            time_to_maturity,
            strike,
            spot,
            volatility,
            risk_free_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against the formula's domain, in declaration order.
    pub fn validate(&self) -> Result<()> {
        validate_positive(self.time_to_maturity, "time_to_maturity")?;
        validate_positive(self.strike, "strike")?;
        validate_positive(self.spot, "spot")?;
        validate_positive(self.volatility, "volatility")?;
        validate_finite(self.risk_free_rate, "risk_free_rate")?;
        Ok(())
    }

    /// Same maturity, strike and rate at a different (spot, volatility) point.
    pub fn at(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }
}

/// Model call and put prices for one [`PricingParameters`] value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PricingResult {
    /// Both prices with sub-zero cancellation noise clamped to zero. NaN is kept.
    pub fn non_negative(self) -> Self {
        Self {
            call_price: clamp_non_negative(self.call_price),
            put_price: clamp_non_negative(self.put_price),
        }
    }
}

/// Reference market bid prices the surface is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidPrices {
    pub call_bid: f64,
    pub put_bid: f64,
}

impl BidPrices {
    pub fn new(call_bid: f64, put_bid: f64) -> Self {
        Self { call_bid, put_bid }
    }
}

/// Spot/volatility P&L surface.
///
/// `call_pnl[i][j]` and `put_pnl[i][j]` hold the model price at
/// `(spot_axis[i], volatility_axis[j])` minus the bid, rounded to cents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlSurface {
    pub spot_axis: Vec<f64>,
    pub volatility_axis: Vec<f64>,
    pub call_pnl: Vec<Vec<f64>>,
    pub put_pnl: Vec<Vec<f64>>,
}

impl PnlSurface {
    /// `(rows, columns)`, i.e. `(spot_axis.len(), volatility_axis.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.spot_axis.len(), self.volatility_axis.len())
    }

    pub fn is_empty(&self) -> bool {
        self.spot_axis.is_empty() || self.volatility_axis.is_empty()
    }

    /// `(call_pnl, put_pnl)` at row `i` (spot) and column `j` (volatility).
    pub fn cell(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        let call = *self.call_pnl.get(i)?.get(j)?;
        let put = *self.put_pnl.get(i)?.get(j)?;
        Some((call, put))
    }
}

/// One grid cell in long format, as fed to a heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlRow {
    pub spot: f64,
    pub volatility: f64,
    pub call_pnl: f64,
    pub put_pnl: f64,
}

/// Point price and surface answering one [`SweepRequest`](crate::SweepRequest).
///
/// The surface is generated from `parameters` with only spot and volatility
/// varied, so both share maturity, strike and rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub parameters: PricingParameters,
    pub bids: BidPrices,
    pub point: PricingResult,
    pub surface: PnlSurface,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;

    #[test]
    fn new_reports_first_offending_field() {
        let err = PricingParameters::new(1.0, 0.0, -5.0, 0.2, 0.05).unwrap_err();
        assert_eq!(
            err,
            SurfaceError::InvalidParameter {
                field: "strike",
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_rate_is_allowed() {
        assert!(PricingParameters::new(1.0, 100.0, 100.0, 0.2, -0.01).is_ok());
        assert!(PricingParameters::new(1.0, 100.0, 100.0, 0.2, f64::NAN).is_err());
    }

    #[test]
    fn at_keeps_maturity_strike_and_rate() {
        let base = PricingParameters::new(2.0, 90.0, 100.0, 0.2, 0.05).unwrap();
        let moved = base.at(95.0, 0.35);
        assert_eq!(moved.time_to_maturity, 2.0);
        assert_eq!(moved.strike, 90.0);
        assert_eq!(moved.risk_free_rate, 0.05);
        assert_eq!(moved.spot, 95.0);
        assert_eq!(moved.volatility, 0.35);
    }

    #[test]
    fn cell_out_of_bounds_is_none() {
        let surface = PnlSurface {
            spot_axis: vec![1.0],
            volatility_axis: vec![0.2],
            call_pnl: vec![vec![0.5]],
            put_pnl: vec![vec![-0.5]],
        };
        assert_eq!(surface.shape(), (1, 1));
        assert_eq!(surface.cell(0, 0), Some((0.5, -0.5)));
        assert_eq!(surface.cell(1, 0), None);
        assert_eq!(surface.cell(0, 1), None);
    }
}
