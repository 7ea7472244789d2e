//! Flattened views of a [`PnlSurface`] for charts and files.

use std::io::Write;

use anyhow::{Context, Result};
use statrs::statistics::Statistics;

use crate::surface::types::{PnlRow, PnlSurface};

/// Min, max and mean of one P&L matrix. All NaN for an empty surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl PnlRange {
    fn of(matrix: &[Vec<f64>]) -> Self {
        let values: Vec<f64> = matrix.iter().flatten().copied().collect();
        Self {
            min: Statistics::min(&values),
            max: Statistics::max(&values),
            mean: Statistics::mean(&values),
        }
    }
}

/// Colour-scale bounds for both heatmaps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlSummary {
    pub call: PnlRange,
    pub put: PnlRange,
}

impl PnlSurface {
    /// Every cell in row-major order (spot outer, volatility inner).
    ///
    /// Cells missing from a ragged or short matrix are skipped.
    pub fn rows(&self) -> Vec<PnlRow> {
        let mut rows = Vec::with_capacity(self.spot_axis.len() * self.volatility_axis.len());
        for ((&spot, call_row), put_row) in self
            .spot_axis
            .iter()
            .zip(&self.call_pnl)
            .zip(&self.put_pnl)
        {
            for ((&volatility, &call_pnl), &put_pnl) in self
                .volatility_axis
                .iter()
                .zip(call_row)
                .zip(put_row)
            {
                rows.push(PnlRow {
                    spot,
                    volatility,
                    call_pnl,
                    put_pnl,
                });
            }
        }
        rows
    }

    /// Write `spot,volatility,call_pnl,put_pnl` rows with a header line.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["spot", "volatility", "call_pnl", "put_pnl"])
            .context("failed to write csv header")?;
        for row in self.rows() {
            wtr.write_record([
                row.spot.to_string(),
                row.volatility.to_string(),
                row.call_pnl.to_string(),
                row.put_pnl.to_string(),
            ])
            .with_context(|| format!("failed to write row at spot={}", row.spot))?;
        }
        wtr.flush().context("failed to flush csv writer")?;
        Ok(())
    }

    pub fn summary(&self) -> PnlSummary {
        PnlSummary {
            call: PnlRange::of(&self.call_pnl),
            put: PnlRange::of(&self.put_pnl),
        }
    }
}
