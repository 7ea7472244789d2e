//! Adapter between a presentation layer and the engine.
//!
//! A [`SweepRequest`] carries the nine scalar inputs a dashboard collects.
//! [`evaluate`] turns one request into the point price and the P&L surface
//! around it.

use crate::error::Result;
use crate::models::bs::price_with_policy;
use crate::surface::config::{GridConfig, SurfaceConfig};
use crate::surface::generator::SurfaceGenerator;
use crate::surface::grid::GridSpec;
use crate::surface::types::{BidPrices, Evaluation, PricingParameters};

/// User inputs for one pricing + heatmap request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepRequest {
    pub spot: f64,
    pub strike: f64,
    pub volatility: f64,
    pub time_to_maturity: f64,
    pub risk_free_rate: f64,
    pub call_bid: f64,
    pub put_bid: f64,
    pub volatility_min: f64,
    pub volatility_max: f64,
}

impl Default for SweepRequest {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.2,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
            call_bid: 10.0,
            put_bid: 10.0,
            volatility_min: 0.1,
            volatility_max: 0.5,
        }
    }
}

impl SweepRequest {
    pub fn parameters(&self) -> PricingParameters {
        PricingParameters {
            time_to_maturity: self.time_to_maturity,
            strike: self.strike,
            spot: self.spot,
            volatility: self.volatility,
            risk_free_rate: self.risk_free_rate,
        }
    }

    pub fn bids(&self) -> BidPrices {
        BidPrices::new(self.call_bid, self.put_bid)
    }

    /// Heatmap grid centred on the requested spot.
    pub fn grid(&self, config: &GridConfig) -> GridSpec {
        GridSpec::from_config(self.spot, self.volatility_min, self.volatility_max, config)
    }

    /// Labelled inputs in display order.
    pub fn parameter_table(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Underlying Price (S)", self.spot),
            ("Strike Price (K)", self.strike),
            ("Implied Volatility (σ)", self.volatility),
            ("Time to Maturity (T)", self.time_to_maturity),
            ("Risk-Free Rate (r)", self.risk_free_rate),
            ("Call Option Bid Price", self.call_bid),
            ("Put Option Bid Price", self.put_bid),
            ("Min Implied Volatility (σ min)", self.volatility_min),
            ("Max Implied Volatility (σ max)", self.volatility_max),
        ]
    }

    /// Parse a TOML document; missing keys take the dashboard defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).map_err(|e| anyhow::anyhow!("invalid sweep request: {e}"))
    }
}

/// Price the requested point and build the surface around it.
///
/// Both come from the same [`PricingParameters`], so they share maturity,
/// strike and rate.
pub fn evaluate(request: &SweepRequest, config: &SurfaceConfig) -> Result<Evaluation> {
    let parameters = request.parameters();
    let bids = request.bids();

    let point = price_with_policy(&parameters, config.validation)?;

    let generator = SurfaceGenerator::black_scholes(*config);
    let surface = generator.sweep(&parameters, &request.grid(&config.grid), &bids)?;

    Ok(Evaluation {
        parameters,
        bids,
        point,
        surface,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_table_has_nine_rows_in_order() {
        let table = SweepRequest::default().parameter_table();
        assert_eq!(table.len(), 9);
        assert_eq!(table[0], ("Underlying Price (S)", 100.0));
        assert_eq!(table[8], ("Max Implied Volatility (σ max)", 0.5));
    }

    #[test]
    fn evaluate_point_is_centre_of_spot_axis() {
        let request = SweepRequest::default();
        let evaluation = evaluate(&request, &SurfaceConfig::reference()).unwrap();
        assert_eq!(evaluation.parameters, request.parameters());
        assert_eq!(evaluation.surface.shape(), (10, 10));
        assert_eq!(evaluation.surface.spot_axis[0], 90.0);
        assert_eq!(evaluation.surface.spot_axis[9], 110.0);
        assert!((evaluation.point.call_price - 10.450583572185565).abs() < 1e-9);
    }

    #[test]
    fn evaluate_surfaces_point_error_first() {
        let request = SweepRequest {
            volatility: 0.0,
            ..SweepRequest::default()
        };
        let err = evaluate(&request, &SurfaceConfig::reference()).unwrap_err();
        assert_eq!(err.field(), "volatility");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn request_from_partial_toml() {
        let request = SweepRequest::from_toml_str("spot = 120.0\nput_bid = 4.5\n").unwrap();
        assert_eq!(request.spot, 120.0);
        assert_eq!(request.put_bid, 4.5);
        assert_eq!(request.strike, 100.0);
        assert_eq!(request.volatility_max, 0.5);
    }
}
