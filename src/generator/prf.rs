use tracing::debug;

use super::SignalGenerator;
use crate::error::{PrfError, Result};
use crate::signal::Signal;

/// Shape parameter `n` of the Erlang gamma kernel
///
/// Read as the number of signalling steps between the attentional pulse and
/// the pupil.
pub const PRF_SHAPE: f64 = 10.1;
/// Rate constant `k` in the exponential term
pub const PRF_RATE: f64 = 10.1;
/// Largest kernel the generator will allocate, in samples
pub const MAX_KERNEL_LEN: usize = 10_000_000;

/// Response condition selecting the kernel's latency constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// A button press is part of the response (Hoeks & Levelt, 1993)
    Motor,
    /// No motor component (McCloy et al., 2016)
    #[default]
    NonMotor,
}

impl ResponseMode {
    /// Select the mode from a "motor response" flag
    pub fn from_motor(motor: bool) -> Self {
        if motor {
            ResponseMode::Motor
        } else {
            ResponseMode::NonMotor
        }
    }

    /// Latency of the response maximum in milliseconds
    pub fn tmax_ms(&self) -> f64 {
        match self {
            ResponseMode::Motor => 930.0,
            ResponseMode::NonMotor => 512.0,
        }
    }

    /// Length of the kernel's time axis in milliseconds
    pub fn tlim_ms(&self) -> f64 {
        match self {
            ResponseMode::Motor => 2500.0,
            ResponseMode::NonMotor => 1300.0,
        }
    }
}

/// Pupil response function kernel generator
///
/// Evaluates `h(t) = t^n * exp(-k * t / tmax)` on `t = 0, step, 2*step, ...`
/// up to and including `tlim`, with `step = 1000 / sample_rate` ms.
///
/// The kernel is not normalized and its tail does not reach zero by `tlim`.
/// Kernels of the two modes differ in scale by many orders of magnitude; use
/// [`Signal::normalized`] before comparing them.
#[derive(Debug, Clone, PartialEq)]
pub struct PrfGenerator {
    sample_rate: f64,
    mode: ResponseMode,
}

impl PrfGenerator {
    /// Create a new PRF generator
    ///
    /// # Arguments
    /// * `sample_rate` - Sampling frequency in Hz (must be finite and > 0)
    /// * `mode` - Response condition
    ///
    /// # Example
    /// ```
    /// use pupilsynth::generator::{PrfGenerator, ResponseMode, SignalGenerator};
    ///
    /// let prf = PrfGenerator::new(1000.0, ResponseMode::Motor).generate().unwrap();
    /// assert_eq!(prf.len(), 2501);
    /// ```
    pub fn new(sample_rate: f64, mode: ResponseMode) -> Self {
        Self { sample_rate, mode }
    }

    /// Kernel value at `t_ms` milliseconds
    pub fn value_at(&self, t_ms: f64) -> f64 {
        t_ms.powf(PRF_SHAPE) * (-PRF_RATE * t_ms / self.mode.tmax_ms()).exp()
    }

    /// Number of samples on the time axis, both ends included
    fn sample_count(&self) -> Result<usize> {
        let steps = (self.mode.tlim_ms() * self.sample_rate / 1000.0).floor();
        if steps >= MAX_KERNEL_LEN as f64 {
            return Err(PrfError::InvalidArgument(format!(
                "sampling rate {} Hz needs more than {} kernel samples",
                self.sample_rate, MAX_KERNEL_LEN
            )));
        }
        (steps as usize).checked_add(1).ok_or_else(|| {
            PrfError::InvalidArgument(format!("sampling rate {} Hz is too high", self.sample_rate))
        })
    }
}

impl SignalGenerator for PrfGenerator {
    fn generate(&self) -> Result<Signal> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(PrfError::InvalidArgument(format!(
                "sampling rate must be a positive number of Hz, got {}",
                self.sample_rate
            )));
        }

        let count = self.sample_count()?;
        let step_ms = 1000.0 / self.sample_rate;
        let samples: Vec<f64> = (0..count)
            .map(|k| self.value_at(k as f64 * step_ms))
            .collect();

        debug!(
            mode = ?self.mode,
            sample_rate = self.sample_rate,
            len = samples.len(),
            "generated PRF kernel"
        );
        Ok(Signal::new(samples, self.sample_rate))
    }
}
