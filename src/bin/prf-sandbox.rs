use std::path::PathBuf;

use clap::Parser;
use pupilsynth::generator::ResponseMode;
use pupilsynth::pipeline::{self, PipelineConfig, PipelineOutput};
use pupilsynth::plot::{render_svg, PlotConfig};
use pupilsynth::Signal;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Predict a pupil trace from a train of button presses
#[derive(Debug, Parser)]
#[command(name = "prf-sandbox", version)]
struct Args {
    /// Interval between button presses in milliseconds
    #[arg(long, default_value_t = 1000)]
    ioi: usize,

    /// Every N-th press gets double weight
    #[arg(long, default_value_t = 3)]
    weight: usize,

    /// Use the motor-response PRF (button press involved)
    #[arg(long)]
    motor: bool,

    /// Sampling rate in Hz
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,

    /// Output SVG path
    #[arg(short, long, default_value = "prf-sandbox.svg")]
    output: PathBuf,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Scale each plotted signal to a peak of 1
    #[arg(long)]
    normalize: bool,

    /// Only print the summary
    #[arg(long)]
    no_plot: bool,
}

fn print_summary(output: &PipelineOutput) {
    println!(
        "  {:<26} {:>8} {:>10} {:>12}",
        "Signal", "Samples", "Duration", "Peak"
    );
    println!("  {}", "-".repeat(59));
    for (label, signal) in output.panels() {
        println!(
            "  {:<26} {:>8} {:>9.3}s {:>12.4e}",
            label,
            signal.len(),
            signal.duration_secs(),
            signal.peak().unwrap_or(0.0)
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();
    let config = PipelineConfig {
        sample_rate: args.sample_rate,
        impulse_ioi_ms: args.ioi,
        weight: args.weight,
        mode: ResponseMode::from_motor(args.motor),
    };

    println!("PRF Sandbox");
    println!("===========");
    println!("  Impulse IOI: {}ms", config.impulse_ioi_ms);
    println!("  Weight: {}", config.weight);
    println!("  Mode: {:?}", config.mode);
    println!("  Sample rate: {}Hz", config.sample_rate);
    println!();

    let output = pipeline::run(&config)?;
    print_summary(&output);

    if args.no_plot {
        return Ok(());
    }

    let signals: Vec<(&str, Signal)> = output
        .panels()
        .into_iter()
        .map(|(label, signal)| {
            let signal = if args.normalize {
                signal.normalized()
            } else {
                signal.clone()
            };
            (label, signal)
        })
        .collect();
    let panels: Vec<(&str, &Signal)> = signals.iter().map(|(l, s)| (*l, s)).collect();

    let plot_config = PlotConfig {
        width: args.width,
        height: args.height,
        ..PlotConfig::default()
    };
    if let Err(e) = render_svg(&args.output, &panels, &plot_config) {
        error!(path = %args.output.display(), "rendering failed: {}", e);
        return Err(e.into());
    }

    println!();
    println!("Output: {}", args.output.display());
    Ok(())
}
