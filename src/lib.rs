//! # pnl-surface: Black-Scholes Pricing and P&L Heatmap Surfaces
//!
//! `pnl-surface` prices European call and put options with the closed-form
//! Black-Scholes-Merton model and re-evaluates the model over a grid of
//! underlying prices and implied volatilities. Each cell is reported as P&L
//! against a market bid, giving two matrices ready for a heatmap.
//!
//! ## Core Features
//!
//! - **Point pricing**: [`price`] returns a call/put pair for five scalar inputs
//! - **Surface sweep**: [`sweep`] builds call and put P&L matrices over spot × volatility
//! - **Request adapter**: [`evaluate`] answers a full dashboard request in one call
//! - **Validation policy**: typed errors by default, or NaN/Inf propagation for compatibility
//! - **Export**: long-format rows, CSV output and colour-scale summaries
//!
//! ## Quick Start
//!
//! ```rust
//! use pnl_surface::{price, sweep};
//!
//! let point = price(1.0, 100.0, 100.0, 0.2, 0.05)?;
//! println!("call {:.2} put {:.2}", point.call_price, point.put_price);
//!
//! let surface = sweep(1.0, 100.0, 0.05, 100.0, 10.0, 0.1, 0.5, 10.0, 10.0, 10)?;
//! assert_eq!(surface.shape(), (10, 10));
//! # Ok::<(), pnl_surface::SurfaceError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `reference()`: 10 × 10 grid, spot ± 10, strict validation
//! - `fine()`: 25 × 25 grid
//! - `coarse()`: 5 × 5 grid, sequential
//! - `compat()`: reference grid with NaN/Inf propagation instead of errors
//!
//! ## Cargo Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` on all data types, TOML loading
//! - `parallel` (default): evaluate grid rows on the rayon pool
//! - `logging` (default): `tracing` events around each sweep

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod surface;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{Result, SurfaceError};

// Pricing model
pub use models::{
    bs::{bs_call_price, bs_put_price, price_with_policy, BlackScholes},
    traits::PricingModel,
};

// Surface generation, configuration and export
pub use surface::{
    config::{GridConfig, SurfaceConfig, ValidationPolicy},
    export::{PnlRange, PnlSummary},
    generator::{SurfaceGenerator, PNL_DECIMALS},
    grid::{linspace, GridSpec},
    request::{evaluate, SweepRequest},
    types::{BidPrices, Evaluation, PnlRow, PnlSurface, PricingParameters, PricingResult},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured surface settings.
///
/// # Available Configurations
///
/// - [`reference()`]: the dashboard's 10 × 10 grid
/// - [`fine()`]: higher-resolution heatmaps
/// - [`coarse()`]: quick checks
/// - [`compat()`]: unvalidated, NaN-propagating evaluation
pub mod default_configs {
    use crate::surface::config::SurfaceConfig;

    /// 10 × 10 grid spanning spot ± 10, strict validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pnl_surface::default_configs;
    ///
    /// let config = default_configs::reference();
    /// assert_eq!(config.grid.steps, 10);
    /// ```
    pub fn reference() -> SurfaceConfig {
        SurfaceConfig::reference()
    }

    /// 25 × 25 grid; 625 model evaluations per sweep.
    pub fn fine() -> SurfaceConfig {
        SurfaceConfig::fine()
    }

    /// 5 × 5 grid evaluated sequentially.
    pub fn coarse() -> SurfaceConfig {
        SurfaceConfig::coarse()
    }

    /// Reference grid with [`ValidationPolicy::Propagate`](crate::ValidationPolicy::Propagate):
    /// invalid inputs produce NaN/Inf cells instead of errors.
    pub fn compat() -> SurfaceConfig {
        SurfaceConfig::compat()
    }
}

/// Price a European call and put under Black-Scholes.
///
/// # Arguments
///
/// * `time_to_maturity` - Years to expiry, `> 0`
/// * `strike` - Strike price, `> 0`
/// * `spot` - Underlying price, `> 0`
/// * `volatility` - Implied volatility as a decimal, `> 0`
/// * `risk_free_rate` - Continuously-compounded rate, any finite value
///
/// # Errors
///
/// [`SurfaceError::InvalidParameter`] naming the first out-of-domain input.
/// Use [`price_with_policy`] with [`ValidationPolicy::Propagate`] to get the
/// raw formula's NaN/Inf instead.
///
/// # Example
///
/// ```rust
/// let result = pnl_surface::price(2.0, 90.0, 100.0, 0.2, 0.05)?;
/// assert!((result.call_price - 22.03).abs() < 0.01);
/// assert!((result.put_price - 3.47).abs() < 0.01);
/// # Ok::<(), pnl_surface::SurfaceError>(())
/// ```
pub fn price(
    time_to_maturity: f64,
    strike: f64,
    spot: f64,
    volatility: f64,
    risk_free_rate: f64,
) -> Result<PricingResult> {
    let params = PricingParameters::new(time_to_maturity, strike, spot, volatility, risk_free_rate)?;
    Ok(BlackScholes.evaluate(&params).non_negative())
}

/// Build call and put P&L matrices over a spot × volatility grid.
///
/// The spot axis runs from `spot_center - spot_radius` to
/// `spot_center + spot_radius` and the volatility axis from `volatility_min`
/// to `volatility_max`, each with `steps` points including both ends. Cell
/// `(i, j)` is the model price at `(spot_axis[i], volatility_axis[j])` minus
/// the bid, rounded to two decimals.
///
/// Uses the strict reference configuration; build a [`SurfaceGenerator`] for
/// other policies or custom models.
///
/// # Errors
///
/// * [`SurfaceError::InvalidParameter`] for out-of-domain maturity, strike,
///   rate, bids, or a grid corner with non-positive spot or volatility
/// * [`SurfaceError::InvalidRange`] for `steps == 0`, a negative radius,
///   inverted volatility bounds, or non-finite bounds
#[allow(clippy::too_many_arguments)]
pub fn sweep(
    time_to_maturity: f64,
    strike: f64,
    risk_free_rate: f64,
    spot_center: f64,
    spot_radius: f64,
    volatility_min: f64,
    volatility_max: f64,
    call_bid: f64,
    put_bid: f64,
    steps: usize,
) -> Result<PnlSurface> {
    let base = PricingParameters {
        time_to_maturity,
        strike,
        spot: spot_center,
        volatility: volatility_min,
        risk_free_rate,
    };
    let grid = GridSpec {
        spot_center,
        spot_radius,
        volatility_min,
        volatility_max,
        steps,
    };
    SurfaceGenerator::black_scholes(SurfaceConfig::reference()).sweep(
        &base,
        &grid,
        &BidPrices::new(call_bid, put_bid),
    )
}
