//! Compute stage of the sandbox
//!
//! Builds the impulse train and the PRF kernel, convolves them, and hands the
//! three signals back for display. Nothing is cached: every call recomputes
//! from the configuration.

use tracing::info;

use crate::convolve::convolve_signals;
use crate::error::{PrfError, Result};
use crate::generator::{ImpulseTrainGenerator, PrfGenerator, ResponseMode, SignalGenerator};
use crate::signal::{Signal, DEFAULT_SAMPLE_RATE};

/// Configuration for one sandbox run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Milliseconds between button presses
    pub impulse_ioi_ms: usize,
    /// Every `weight`-th press is doubled
    pub weight: usize,
    /// Response condition for the kernel
    pub mode: ResponseMode,
}

impl PipelineConfig {
    /// Press interval converted to samples at `sample_rate`
    ///
    /// Rounds to the nearest sample. Intervals that round to zero samples are
    /// rejected.
    pub fn impulse_ioi_samples(&self) -> Result<usize> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(PrfError::InvalidArgument(format!(
                "sampling rate must be a positive number of Hz, got {}",
                self.sample_rate
            )));
        }
        let samples = (self.impulse_ioi_ms as f64 * self.sample_rate / 1000.0).round();
        if samples < 1.0 {
            return Err(PrfError::InvalidArgument(format!(
                "impulse IOI of {}ms is shorter than one sample at {}Hz",
                self.impulse_ioi_ms, self.sample_rate
            )));
        }
        Ok(samples as usize)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            impulse_ioi_ms: 1000,
            weight: 3,
            mode: ResponseMode::NonMotor,
        }
    }
}

/// The three signals produced by a run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub impulse_train: Signal,
    pub prf: Signal,
    pub predicted: Signal,
}

impl PipelineOutput {
    /// Labelled signals in display order
    pub fn panels(&self) -> [(&'static str, &Signal); 3] {
        [
            ("Impulse train", &self.impulse_train),
            ("Pupil response function", &self.prf),
            ("Predicted pupil response", &self.predicted),
        ]
    }
}

/// Run the impulse train through the PRF
///
/// # Example
/// ```
/// use pupilsynth::pipeline::{run, PipelineConfig};
///
/// let output = run(&PipelineConfig::default()).unwrap();
/// assert_eq!(output.predicted.len(), 10_000 + 1301);
/// ```
pub fn run(config: &PipelineConfig) -> Result<PipelineOutput> {
    let impulse_ioi = config.impulse_ioi_samples()?;
    let impulse_train = ImpulseTrainGenerator::new(impulse_ioi, config.weight)
        .with_sample_rate(config.sample_rate)
        .generate()?;
    let prf = PrfGenerator::new(config.sample_rate, config.mode).generate()?;
    let predicted = convolve_signals(&impulse_train, &prf)?;

    info!(
        impulse_ioi_ms = config.impulse_ioi_ms,
        impulse_ioi,
        weight = config.weight,
        mode = ?config.mode,
        predicted_len = predicted.len(),
        "computed predicted pupil response"
    );

    Ok(PipelineOutput {
        impulse_train,
        prf,
        predicted,
    })
}
