use pnl_surface::{default_configs, evaluate, SurfaceConfig, SweepRequest, ValidationPolicy};

fn describe(name: &str, config: &SurfaceConfig, use_case: &str) {
    println!("{name}:");
    println!("   Grid: {0} x {0}", config.grid.steps);
    println!("   Spot window: ±{}", config.grid.spot_radius);
    println!("   Validation: {:?}", config.validation);
    println!("   Parallel rows: {}", config.parallel);
    println!("   Use case: {use_case}\n");
}

fn main() {
    println!("pnl-surface Default Configuration Examples\n");

    describe(
        "1. Reference Configuration",
        &default_configs::reference(),
        "matches the dashboard's 10x10 heatmap",
    );
    describe(
        "2. Fine Configuration",
        &default_configs::fine(),
        "smoother heatmaps, reports",
    );
    describe(
        "3. Coarse Configuration",
        &default_configs::coarse(),
        "quick checks, debugging",
    );
    describe(
        "4. Compat Configuration",
        &default_configs::compat(),
        "reproduce unvalidated NaN/Inf output",
    );

    // A request outside the model's domain: zero volatility at the money.
    let request = SweepRequest {
        volatility: 0.0,
        volatility_min: 0.0,
        ..SweepRequest::default()
    };

    for config in [default_configs::reference(), default_configs::compat()] {
        let label = match config.validation {
            ValidationPolicy::Strict => "strict",
            ValidationPolicy::Propagate => "propagate",
        };
        match evaluate(&request, &config) {
            Ok(evaluation) => {
                println!(
                    "✅ {label}: call={} put={} first cell={:?}",
                    evaluation.point.call_price,
                    evaluation.point.put_price,
                    evaluation.surface.cell(0, 0)
                );
            }
            Err(e) => {
                println!("❌ {label}: {e}");
            }
        }
    }
}
