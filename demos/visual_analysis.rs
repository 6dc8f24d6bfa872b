// demos/visual_analysis.rs
use bsm_greeks::models::{BlackScholesModel, OptionType};
use bsm_greeks::output;
use bsm_greeks::visualizer::{plot_analysis, save_svg, SweepConfig};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Usage: visual_analysis [call|put] [out_dir]
    let args: Vec<String> = std::env::args().collect();
    let option_type: OptionType = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => OptionType::Call,
    };
    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("results"));

    // Spot=100, Strike=105, Time=1yr, Rate=5%, Vol=20%
    let model = BlackScholesModel::new(100.0, 105.0, 1.0, 0.05, 0.2, option_type);

    println!("Option Price: {:.4}", model.price(None));
    println!("Delta: {:.4}", model.greeks(None).delta);

    let cfg = SweepConfig::default();
    let analysis = plot_analysis(&model, &cfg)?;
    tracing::info!(
        points = analysis.len(),
        start = cfg.start,
        end = cfg.end,
        "{}",
        analysis.title()
    );

    std::fs::create_dir_all(&out_dir)?;
    let csv_path = out_dir.join("analysis.csv");
    let svg_path = out_dir.join("analysis.svg");

    output::write_analysis_to_csv(&csv_path, &analysis)?;
    println!("Sweep data written to {}", csv_path.display());

    save_svg(&svg_path, &analysis, cfg.panels)?;
    println!("Charts written to {}", svg_path.display());

    Ok(())
}
