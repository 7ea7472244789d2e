/// How engine inputs are checked before the formula runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationPolicy {
    /// Reject out-of-domain inputs with a typed [`SurfaceError`](crate::SurfaceError).
    #[default]
    Strict,
    /// No checks: NaN and infinities from the raw formula flow into the
    /// results unchanged, and degenerate grid bounds are interpolated as given.
    Propagate,
}

impl ValidationPolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }
}

/// Resolution of the spot/volatility grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of points on each axis
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,

    /// Half-width of the spot window around the requested spot
    #[cfg_attr(feature = "serde", serde(default = "default_spot_radius"))]
    pub spot_radius: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            spot_radius: default_spot_radius(),
        }
    }
}

/// Main configuration struct for surface generation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: GridConfig,

    #[cfg_attr(feature = "serde", serde(default))]
    pub validation: ValidationPolicy,

    /// Evaluate grid rows on the rayon pool. Ignored without the `parallel`
    /// feature.
    #[cfg_attr(feature = "serde", serde(default = "default_parallel"))]
    pub parallel: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            validation: ValidationPolicy::default(),
            parallel: default_parallel(),
        }
    }
}

impl SurfaceConfig {
    /// 10x10 grid, spot window of ±10, strict validation
    pub fn reference() -> Self {
        Self::default()
    }

    /// 25x25 grid for smoother heatmaps
    pub fn fine() -> Self {
        Self {
            grid: GridConfig {
                steps: 25,
                ..GridConfig::default()
            },
            ..Self::default()
        }
    }

    /// 5x5 grid for quick checks
    pub fn coarse() -> Self {
        Self {
            grid: GridConfig {
                steps: 5,
                ..GridConfig::default()
            },
            parallel: false,
            ..Self::default()
        }
    }

    /// Reference grid without input validation; NaN/Inf propagate into the
    /// matrices instead of raising errors.
    pub fn compat() -> Self {
        Self {
            validation: ValidationPolicy::Propagate,
            ..Self::default()
        }
    }

    /// Parse a TOML document. Missing keys fall back to their defaults.
    ///
    /// ```rust
    /// # use pnl_surface::{SurfaceConfig, ValidationPolicy};
    /// let config = SurfaceConfig::from_toml_str(
    ///     "validation = \"propagate\"\n[grid]\nsteps = 20\n",
    /// )?;
    /// assert_eq!(config.grid.steps, 20);
    /// assert_eq!(config.grid.spot_radius, 10.0);
    /// assert_eq!(config.validation, ValidationPolicy::Propagate);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).map_err(|e| anyhow::anyhow!("invalid surface config: {e}"))
    }

    /// Load a TOML config file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

fn default_steps() -> usize {
    10
}

fn default_spot_radius() -> f64 {
    10.0
}

fn default_parallel() -> bool {
    true
}
