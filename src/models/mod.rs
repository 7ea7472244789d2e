pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::surface::types::{PricingParameters, PricingResult};

    /// A closed-form model producing a call/put pair from one parameter set.
    ///
    /// `evaluate` does no validation: callers decide the policy (see
    /// [`ValidationPolicy`](crate::surface::config::ValidationPolicy)) and
    /// out-of-domain inputs surface as NaN or infinities.
    pub trait PricingModel: Send + Sync {
        /// Short identifier used in logs.
        fn model_name(&self) -> &str;

        fn evaluate(&self, params: &PricingParameters) -> PricingResult;
    }
}

/// Numerical helpers shared by the models and the surface generator
pub mod utils {
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Written in terms of `erfc` so the lower tail keeps full relative
    /// precision.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Clamp cancellation noise below zero to zero. NaN passes through.
    pub fn clamp_non_negative(x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            x
        }
    }

    /// Round to `decimals` places, half away from zero. NaN and infinities
    /// are returned unchanged.
    pub fn round_to(x: f64, decimals: i32) -> f64 {
        if !x.is_finite() {
            return x;
        }
        let scale = 10f64.powi(decimals);
        (x * scale).round() / scale
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn norm_cdf_reference_points() {
            assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
            assert!((norm_cdf(1.96) - 0.9750021048517795).abs() < 1e-12);
            assert!((norm_cdf(-1.0) + norm_cdf(1.0) - 1.0).abs() < 1e-15);
            assert!(norm_cdf(-40.0) >= 0.0);
            assert_eq!(norm_cdf(40.0), 1.0);
        }

        #[test]
        fn round_to_two_places() {
            assert_eq!(round_to(-8.3193644697, 2), -8.32);
            assert_eq!(round_to(3.14159, 2), 3.14);
            assert_eq!(round_to(0.0, 2), 0.0);
            assert!(round_to(f64::NAN, 2).is_nan());
            assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
        }

        #[test]
        fn clamp_keeps_nan() {
            assert_eq!(clamp_non_negative(-1e-17), 0.0);
            assert_eq!(clamp_non_negative(2.5), 2.5);
            assert!(clamp_non_negative(f64::NAN).is_nan());
        }
    }
}
