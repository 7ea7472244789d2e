use crate::error::{validate_finite, validate_positive, Result};
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::models::utils::round_to;
use crate::surface::config::SurfaceConfig;
use crate::surface::grid::GridSpec;
use crate::surface::types::{BidPrices, PnlSurface, PricingParameters};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Decimal places kept in every P&L cell.
pub const PNL_DECIMALS: i32 = 2;

/// Re-prices a model over a spot/volatility grid and nets out bid prices.
pub struct SurfaceGenerator<M: PricingModel = BlackScholes> {
    model: M,
    config: SurfaceConfig,
}

impl SurfaceGenerator<BlackScholes> {
    /// Black-Scholes generator with the given configuration.
    pub fn black_scholes(config: SurfaceConfig) -> Self {
        Self::new(BlackScholes, config)
    }
}

impl<M: PricingModel> SurfaceGenerator<M> {
    pub fn new(model: M, config: SurfaceConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Grid centred on `spot_center` using this generator's resolution and radius.
    pub fn grid(&self, spot_center: f64, volatility_min: f64, volatility_max: f64) -> GridSpec {
        GridSpec::from_config(
            spot_center,
            volatility_min,
            volatility_max,
            &self.config.grid,
        )
    }

    /// Build the P&L surface.
    ///
    /// `base` supplies maturity, strike and rate; its spot and volatility are
    /// ignored in favour of the grid coordinates. Under the strict policy all
    /// inputs are checked up front, so an error means no cell was evaluated,
    /// and model prices are clamped at zero before the bid is netted out.
    /// Under the propagating policy every cell is the raw model output.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidParameter`](crate::SurfaceError::InvalidParameter)
    /// for an out-of-domain base parameter, grid corner or bid, and
    /// [`SurfaceError::InvalidRange`](crate::SurfaceError::InvalidRange) for
    /// unusable grid bounds.
    pub fn sweep(
        &self,
        base: &PricingParameters,
        grid: &GridSpec,
        bids: &BidPrices,
    ) -> Result<PnlSurface> {
        #[cfg(feature = "logging")]
        tracing::debug!(
            model = self.model.model_name(),
            steps = grid.steps,
            spot_radius = grid.spot_radius,
            policy = ?self.config.validation,
            "surface sweep started"
        );

        if self.config.validation.is_strict() {
            // spot and volatility come from the grid, which checks its own corners
            validate_positive(base.time_to_maturity, "time_to_maturity")?;
            validate_positive(base.strike, "strike")?;
            validate_finite(base.risk_free_rate, "risk_free_rate")?;
            grid.validate()?;
            validate_finite(bids.call_bid, "call_bid")?;
            validate_finite(bids.put_bid, "put_bid")?;
        }

        let spot_axis = grid.spot_axis();
        let volatility_axis = grid.volatility_axis();

        let strict = self.config.validation.is_strict();
        let row = |&spot: &f64| -> (Vec<f64>, Vec<f64>) {
            volatility_axis
                .iter()
                .map(|&volatility| {
                    let raw = self.model.evaluate(&base.at(spot, volatility));
                    let result = if strict { raw.non_negative() } else { raw };
                    (
                        round_to(result.call_price - bids.call_bid, PNL_DECIMALS),
                        round_to(result.put_price - bids.put_bid, PNL_DECIMALS),
                    )
                })
                .unzip()
        };

        #[cfg(feature = "parallel")]
        let rows: Vec<(Vec<f64>, Vec<f64>)> = if self.config.parallel {
            spot_axis.par_iter().map(row).collect()
        } else {
            spot_axis.iter().map(row).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<(Vec<f64>, Vec<f64>)> = spot_axis.iter().map(row).collect();

        let (call_pnl, put_pnl): (Vec<Vec<f64>>, Vec<Vec<f64>>) = rows.into_iter().unzip();

        #[cfg(feature = "logging")]
        {
            let non_finite = call_pnl
                .iter()
                .chain(put_pnl.iter())
                .flatten()
                .filter(|v| !v.is_finite())
                .count();
            if non_finite > 0 {
                tracing::warn!(non_finite, "surface contains non-finite cells");
            }
            tracing::debug!(
                cells = spot_axis.len() * volatility_axis.len(),
                "surface sweep complete"
            );
        }

        Ok(PnlSurface {
            spot_axis,
            volatility_axis,
            call_pnl,
            put_pnl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SurfaceError;
    use crate::surface::config::ValidationPolicy;

    fn base() -> PricingParameters {
        PricingParameters::new(1.0, 100.0, 100.0, 0.2, 0.05).unwrap()
    }

    #[test]
    fn strict_sweep_rejects_bad_strike_before_grid() {
        let generator = SurfaceGenerator::black_scholes(SurfaceConfig::reference());
        let bad = PricingParameters {
            strike: -100.0,
            ..base()
        };
        let grid = generator.grid(100.0, 0.5, 0.1);
        let err = generator
            .sweep(&bad, &grid, &BidPrices::new(10.0, 10.0))
            .unwrap_err();
        assert_eq!(
            err,
            SurfaceError::InvalidParameter {
                field: "strike",
                value: -100.0
            }
        );
    }

    #[test]
    fn strict_sweep_rejects_non_finite_bid() {
        let generator = SurfaceGenerator::black_scholes(SurfaceConfig::reference());
        let grid = generator.grid(100.0, 0.1, 0.5);
        let err = generator
            .sweep(&base(), &grid, &BidPrices::new(10.0, f64::NAN))
            .unwrap_err();
        assert_eq!(err.field(), "put_bid");
    }

    #[test]
    fn propagate_sweep_accepts_reversed_volatility() {
        let config = SurfaceConfig {
            validation: ValidationPolicy::Propagate,
            ..SurfaceConfig::coarse()
        };
        let generator = SurfaceGenerator::black_scholes(config);
        let grid = generator.grid(100.0, 0.5, 0.1);
        let surface = generator
            .sweep(&base(), &grid, &BidPrices::new(0.0, 0.0))
            .unwrap();
        assert_eq!(surface.volatility_axis.first(), Some(&0.5));
        assert_eq!(surface.volatility_axis.last(), Some(&0.1));
        // higher vol first, so call value falls along each row
        for row in &surface.call_pnl {
            assert!(row.windows(2).all(|w| w[1] <= w[0]));
        }
    }

    #[test]
    fn propagate_sweep_with_zero_steps_is_empty() {
        let config = SurfaceConfig {
            grid: crate::surface::config::GridConfig {
                steps: 0,
                spot_radius: 10.0,
            },
            ..SurfaceConfig::compat()
        };
        let generator = SurfaceGenerator::black_scholes(config);
        let grid = generator.grid(100.0, 0.1, 0.5);
        let surface = generator
            .sweep(&base(), &grid, &BidPrices::new(10.0, 10.0))
            .unwrap();
        assert!(surface.is_empty());
        assert!(surface.call_pnl.is_empty());
    }
}
