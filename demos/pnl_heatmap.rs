// Example: pnl_heatmap.rs
// Builds the call and put P&L surfaces for one request and renders them as two
// side-by-side SVG heatmaps with a red-yellow-green scale, plus a CSV dump.
//
// Usage:
//     cargo run --example pnl_heatmap -- [config.toml] [request.toml]
//
// Outputs pnl_heatmap.svg and pnl_surface.csv in the working directory.

use std::env;
use std::error::Error;
use std::fs::File;

use plotters::prelude::*;
use pnl_surface::{evaluate, PnlRange, SurfaceConfig, SweepRequest};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Colour scale
// ---------------------------------------------------------------------------

/// Red (loss) through yellow (flat) to green (profit), symmetric around zero
/// so a cell's colour means the same thing on both charts.
fn rdylgn(value: f64, range: &PnlRange) -> RGBColor {
    if !value.is_finite() {
        return RGBColor(128, 128, 128);
    }
    let bound = range.min.abs().max(range.max.abs()).max(f64::EPSILON);
    let x = (value / bound).clamp(-1.0, 1.0);
    let lerp = |a: u8, b: u8, t: f64| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    if x < 0.0 {
        let t = x + 1.0;
        RGBColor(lerp(215, 255, t), lerp(48, 255, t), lerp(39, 191, t))
    } else {
        RGBColor(lerp(255, 26, x), lerp(255, 152, x), lerp(191, 80, x))
    }
}

fn draw_heatmap(
    area: &DrawingArea<SVGBackend, plotters::coord::Shift>,
    title: &str,
    spots: &[f64],
    vols: &[f64],
    matrix: &[Vec<f64>],
    range: &PnlRange,
) -> Result<(), Box<dyn Error>> {
    let (n_spot, n_vol) = (spots.len(), vols.len());
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 26))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n_spot, 0..n_vol)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Stock Price")
        .y_desc("Implied Volatility")
        .x_labels(n_spot)
        .y_labels(n_vol)
        .x_label_formatter(&|i: &usize| spots.get(*i).map(|s| format!("{s:.1}")).unwrap_or_default())
        .y_label_formatter(&|j: &usize| vols.get(*j).map(|v| format!("{v:.2}")).unwrap_or_default())
        .draw()?;

    chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &value)| {
            Rectangle::new([(i, j), (i + 1, j + 1)], rdylgn(value, range).filled())
        })
    }))?;

    // Cell labels, like text_auto on the dashboard heatmaps
    if n_spot <= 15 {
        chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| {
                Text::new(format!("{value:.2}"), (i, j), ("sans-serif", 12).into_font())
            })
        }))?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => SurfaceConfig::from_file(path)?,
        None => SurfaceConfig::reference(),
    };
    let request = match args.get(2) {
        Some(path) => SweepRequest::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => SweepRequest::default(),
    };

    let evaluation = evaluate(&request, &config)?;
    let surface = &evaluation.surface;
    let summary = surface.summary();

    println!(
        "Call {:.2} / Put {:.2} at S={} K={} σ={} T={} r={}",
        evaluation.point.call_price,
        evaluation.point.put_price,
        request.spot,
        request.strike,
        request.volatility,
        request.time_to_maturity,
        request.risk_free_rate
    );

    let root = SVGBackend::new("pnl_heatmap.svg", (1600, 720)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(800);

    draw_heatmap(
        &left,
        "Call Option P&L Heatmap",
        &surface.spot_axis,
        &surface.volatility_axis,
        &surface.call_pnl,
        &summary.call,
    )?;
    draw_heatmap(
        &right,
        "Put Option P&L Heatmap",
        &surface.spot_axis,
        &surface.volatility_axis,
        &surface.put_pnl,
        &summary.put,
    )?;
    root.present()?;
    println!("Chart saved to pnl_heatmap.svg");

    surface.write_csv(File::create("pnl_surface.csv")?)?;
    println!("Surface saved to pnl_surface.csv");

    Ok(())
}
