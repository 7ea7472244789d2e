// demos/pricing_demo.rs

//! Demonstration of point pricing and the P&L surface
//!
//! This example shows how to:
//! 1. Price a European call and put from the five model inputs
//! 2. Build call/put P&L matrices over a spot × volatility grid
//! 3. Print the matrices the way a heatmap would lay them out
//!
//! Usage:
//!     cargo run --example pricing_demo [request.toml]
//!
//! Without an argument the dashboard's default inputs are used.

use anyhow::{Context, Result};
use pnl_surface::{default_configs, evaluate, SweepRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request = match std::env::args().nth(1) {
        Some(path) => {
            let source =
                std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            SweepRequest::from_toml_str(&source)?
        }
        None => SweepRequest::default(),
    };

    println!("Black-Scholes Option Pricing");
    println!("============================");

    println!("\nCurrent Input Parameters:");
    for (label, value) in request.parameter_table() {
        println!("  {:<32} {}", label, value);
    }

    let config = default_configs::reference();
    let evaluation = evaluate(&request, &config)?;

    println!("\nOption Values:");
    println!(
        "  European Call Option Value: {:.2}",
        evaluation.point.call_price
    );
    println!(
        "  European Put Option Value:  {:.2}",
        evaluation.point.put_price
    );

    let surface = &evaluation.surface;
    for (title, matrix) in [
        ("Call P&L", &surface.call_pnl),
        ("Put P&L", &surface.put_pnl),
    ] {
        println!("\n{title} (rows: spot, columns: volatility)");
        print!("{:>9}", "");
        for vol in &surface.volatility_axis {
            print!("{:>8.3}", vol);
        }
        println!();
        println!("{}", "-".repeat(9 + 8 * surface.volatility_axis.len()));
        for (spot, row) in surface.spot_axis.iter().zip(matrix.iter()) {
            print!("{:>8.2} ", spot);
            for cell in row {
                print!("{:>8.2}", cell);
            }
            println!();
        }
    }

    let summary = surface.summary();
    println!("\nSummary Statistics:");
    println!(
        "  Call P&L range: [{:.2}, {:.2}], mean {:.2}",
        summary.call.min, summary.call.max, summary.call.mean
    );
    println!(
        "  Put P&L range:  [{:.2}, {:.2}], mean {:.2}",
        summary.put.min, summary.put.max, summary.put.mean
    );

    Ok(())
}
