//! Sampled axes of the P&L surface.

use crate::error::{validate_finite, validate_positive, Result, SurfaceError};
use crate::surface::config::GridConfig;

/// `steps` evenly spaced values from `start` to `stop`, both included.
///
/// The last value is pinned to `stop` so accumulated rounding never moves the
/// upper bound. With `steps == 1` only `start` is returned; with `steps == 0`
/// the axis is empty. Descending bounds give a descending axis.
pub fn linspace(start: f64, stop: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            let mut axis: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            axis[n - 1] = stop;
            axis
        }
    }
}

/// Bounds and resolution of the spot and volatility axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub spot_center: f64,
    pub spot_radius: f64,
    pub volatility_min: f64,
    pub volatility_max: f64,
    pub steps: usize,
}

impl GridSpec {
    /// Grid centred on `spot_center` with resolution and radius from `config`.
    pub fn from_config(
        spot_center: f64,
        volatility_min: f64,
        volatility_max: f64,
        config: &GridConfig,
    ) -> Self {
        Self {
            spot_center,
            spot_radius: config.spot_radius,
            volatility_min,
            volatility_max,
            steps: config.steps,
        }
    }

    pub fn spot_min(&self) -> f64 {
        self.spot_center - self.spot_radius
    }

    pub fn spot_max(&self) -> f64 {
        self.spot_center + self.spot_radius
    }

    pub fn spot_axis(&self) -> Vec<f64> {
        linspace(self.spot_min(), self.spot_max(), self.steps)
    }

    pub fn volatility_axis(&self) -> Vec<f64> {
        linspace(self.volatility_min, self.volatility_max, self.steps)
    }

    /// Rejects bounds that cannot produce a priceable ascending grid.
    ///
    /// Equal volatility bounds and a zero radius are accepted; they yield
    /// constant axes.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(SurfaceError::InvalidRange {
                field: "steps",
                message: "grid needs at least one step".into(),
            });
        }
        for (value, field) in [
            (self.spot_center, "spot_center"),
            (self.spot_radius, "spot_radius"),
            (self.volatility_min, "volatility_min"),
            (self.volatility_max, "volatility_max"),
        ] {
            if !value.is_finite() {
                return Err(SurfaceError::InvalidRange {
                    field,
                    message: format!("bound must be finite, got {value}"),
                });
            }
        }
        if self.spot_radius < 0.0 {
            return Err(SurfaceError::InvalidRange {
                field: "spot_radius",
                message: format!("radius must be non-negative, got {}", self.spot_radius),
            });
        }
        if self.volatility_min > self.volatility_max {
            return Err(SurfaceError::InvalidRange {
                field: "volatility_min",
                message: format!(
                    "{} exceeds volatility_max {}",
                    self.volatility_min, self.volatility_max
                ),
            });
        }

        // Axes ascend, so checking the lower corner covers every cell.
        validate_positive(self.spot_min(), "spot")?;
        validate_positive(self.volatility_min, "volatility")?;
        validate_finite(self.spot_max(), "spot")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_grid() -> GridSpec {
        GridSpec {
            spot_center: 100.0,
            spot_radius: 10.0,
            volatility_min: 0.1,
            volatility_max: 0.5,
            steps: 10,
        }
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        let axis = linspace(90.0, 110.0, 10);
        assert_eq!(axis.len(), 10);
        assert_eq!(axis[0], 90.0);
        assert_eq!(axis[9], 110.0);
        let step = 20.0 / 9.0;
        for (i, w) in axis.windows(2).enumerate() {
            assert!((w[1] - w[0] - step).abs() < 1e-12, "uneven gap at {i}");
        }
    }

    #[test]
    fn linspace_single_step_is_lower_bound() {
        assert_eq!(linspace(0.1, 0.5, 1), vec![0.1]);
        assert!(linspace(0.1, 0.5, 0).is_empty());
    }

    #[test]
    fn linspace_descending_bounds() {
        let axis = linspace(0.5, 0.1, 5);
        assert_eq!(axis.first(), Some(&0.5));
        assert_eq!(axis.last(), Some(&0.1));
        assert!(axis.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn reference_axes() {
        let grid = reference_grid();
        assert!(grid.validate().is_ok());
        let spots = grid.spot_axis();
        let vols = grid.volatility_axis();
        assert_eq!((spots[0], spots[9]), (90.0, 110.0));
        assert_eq!((vols[0], vols[9]), (0.1, 0.5));
    }

    #[test]
    fn inverted_volatility_bounds_rejected() {
        let grid = GridSpec {
            volatility_min: 0.6,
            ..reference_grid()
        };
        assert_eq!(grid.validate().unwrap_err().field(), "volatility_min");
    }

    #[test]
    fn negative_radius_rejected() {
        let grid = GridSpec {
            spot_radius: -1.0,
            ..reference_grid()
        };
        assert_eq!(grid.validate().unwrap_err().field(), "spot_radius");
    }

    #[test]
    fn zero_steps_rejected() {
        let grid = GridSpec {
            steps: 0,
            ..reference_grid()
        };
        assert_eq!(grid.validate().unwrap_err().field(), "steps");
    }

    #[test]
    fn spot_window_crossing_zero_rejected() {
        let grid = GridSpec {
            spot_center: 5.0,
            ..reference_grid()
        };
        assert_eq!(
            grid.validate().unwrap_err(),
            SurfaceError::InvalidParameter {
                field: "spot",
                value: -5.0
            }
        );
    }

    #[test]
    fn flat_axes_are_accepted() {
        let grid = GridSpec {
            spot_radius: 0.0,
            volatility_min: 0.3,
            volatility_max: 0.3,
            ..reference_grid()
        };
        assert!(grid.validate().is_ok());
        assert!(grid.spot_axis().iter().all(|&s| s == 100.0));
        assert!(grid.volatility_axis().iter().all(|&v| v == 0.3));
    }
}
