// Closed-form Black-Scholes-Merton prices for European calls and puts on a
// non-dividend-paying underlying. Implied-volatility solving and Greeks are
// intentionally omitted; volatility is always an input.

use crate::error::Result;
use crate::models::traits::PricingModel;
use crate::models::utils::norm_cdf;
use crate::surface::config::ValidationPolicy;
use crate::surface::types::{PricingParameters, PricingResult};

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Inputs are not checked: out-of-domain arguments yield NaN or infinities.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Inputs are not checked: out-of-domain arguments yield NaN or infinities.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)
}

/// The Black-Scholes-Merton model as a [`PricingModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn evaluate(&self, params: &PricingParameters) -> PricingResult {
        let PricingParameters {
            time_to_maturity: t,
            strike: k,
            spot: s,
            volatility: sigma,
            risk_free_rate: r,
        } = *params;

        // d1/d2 and the discount factor are shared by both legs.
        let (d1, d2) = d1_d2(s, k, r, t, sigma);
        let discounted_strike = k * (-r * t).exp();
        let call = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
        let put = discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1);

        PricingResult {
            call_price: call,
            put_price: put,
        }
    }
}

/// Price a call/put pair, validating `params` unless `policy` is
/// [`ValidationPolicy::Propagate`].
///
/// Strict results are clamped at zero. Propagated results are the raw
/// formula, negative values and infinities included.
pub fn price_with_policy(
    params: &PricingParameters,
    policy: ValidationPolicy,
) -> Result<PricingResult> {
    if policy.is_strict() {
        params.validate()?;
        return Ok(BlackScholes.evaluate(params).non_negative());
    }
    Ok(BlackScholes.evaluate(params))
}
