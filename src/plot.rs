//! SVG rendering of labelled signals
//!
//! Each panel is drawn as a line plot in its own horizontal strip, stacked
//! top to bottom in the order given. The x axis is time in seconds and the y
//! axis runs from zero (or the minimum, if negative) to the peak plus 10%.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use tracing::debug;

use crate::error::{PrfError, Result};
use crate::signal::Signal;

/// Headroom added above the peak of each panel
const TOP_PADDING: f64 = 0.1;
/// Upper bound on time axis labels per panel
const MAX_X_LABELS: usize = 100;

/// Layout of the rendered figure
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels, shared by all panels
    pub height: u32,
    /// Spacing of the time axis labels in seconds
    pub tick_interval_secs: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 900,
            tick_interval_secs: 1.0,
        }
    }
}

/// Render `panels` into an SVG file at `path`
pub fn render_svg<P: AsRef<Path>>(
    path: P,
    panels: &[(&str, &Signal)],
    config: &PlotConfig,
) -> Result<()> {
    validate(panels, config)?;
    let root = SVGBackend::new(path.as_ref(), (config.width, config.height)).into_drawing_area();
    draw_panels(&root, panels, config)?;
    debug!(path = %path.as_ref().display(), panels = panels.len(), "wrote plot");
    Ok(())
}

/// Render `panels` into an in-memory SVG document
pub fn render_svg_string(panels: &[(&str, &Signal)], config: &PlotConfig) -> Result<String> {
    validate(panels, config)?;
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width, config.height))
            .into_drawing_area();
        draw_panels(&root, panels, config)?;
    }
    Ok(buffer)
}

fn validate(panels: &[(&str, &Signal)], config: &PlotConfig) -> Result<()> {
    if !config.tick_interval_secs.is_finite() || config.tick_interval_secs <= 0.0 {
        return Err(PrfError::InvalidArgument(format!(
            "tick interval must be a positive number of seconds, got {}",
            config.tick_interval_secs
        )));
    }
    if panels.is_empty() {
        return Err(PrfError::InvalidArgument("nothing to plot".into()));
    }
    for (label, signal) in panels {
        if signal.is_empty() {
            return Err(PrfError::InvalidArgument(format!(
                "panel '{}' has no samples",
                label
            )));
        }
        if !signal.sample_rate().is_finite() || signal.sample_rate() <= 0.0 {
            return Err(PrfError::InvalidArgument(format!(
                "panel '{}' has sampling rate {}",
                label,
                signal.sample_rate()
            )));
        }
    }
    Ok(())
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> PrfError
where
    E: std::error::Error + Send + Sync,
{
    PrfError::Render(err.to_string())
}

/// Value range of a panel's y axis
fn y_range(signal: &Signal) -> (f64, f64) {
    let peak = signal.peak().unwrap_or(0.0);
    let floor = signal
        .samples()
        .iter()
        .copied()
        .fold(0.0, f64::min);
    let top = if peak > 0.0 { peak * (1.0 + TOP_PADDING) } else { 1.0 };
    (floor, top)
}

fn draw_panels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[(&str, &Signal)],
    config: &PlotConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let areas = root.split_evenly((panels.len(), 1));
    for (area, (label, signal)) in areas.iter().zip(panels) {
        let max_time = signal.duration_secs();
        let (y_min, y_max) = y_range(signal);
        let tick_count =
            ((max_time / config.tick_interval_secs).ceil() as usize).min(MAX_X_LABELS - 1) + 1;

        let mut chart = ChartBuilder::on(area)
            .caption(*label, ("sans-serif", 18))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..max_time, y_min..y_max)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .x_labels(tick_count)
            .y_labels(5)
            .x_label_formatter(&|x| format!("{:.1}s", x))
            .y_label_formatter(&|y| format!("{:.2e}", y))
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(
                signal
                    .samples()
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (signal.time_of(i), v)),
                &BLACK,
            ))
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}
