use tracing::debug;

use super::SignalGenerator;
use crate::error::{PrfError, Result};
use crate::signal::{Signal, DEFAULT_SAMPLE_RATE};

/// Length of the impulse train in samples (10 s at 1 kHz)
pub const IMPULSE_TRAIN_LEN: usize = 10_000;

/// Amplitude of a regular impulse
const IMPULSE: f64 = 1.0;
/// Amplitude of an impulse landing on a multiple of `ioi * weight`
const WEIGHTED_IMPULSE: f64 = 2.0;

/// Periodic impulse train generator
///
/// Places a unit impulse every `impulse_ioi` samples and a double-height
/// impulse every `impulse_ioi * weight` samples. Sample 0 always carries the
/// double-height impulse.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpulseTrainGenerator {
    /// Inter-onset interval in samples
    impulse_ioi: usize,
    /// Every `weight`-th impulse is doubled
    weight: usize,
    /// Rate the train is tagged with
    sample_rate: f64,
}

impl ImpulseTrainGenerator {
    /// Create a new impulse train generator
    ///
    /// # Arguments
    /// * `impulse_ioi` - Samples between consecutive impulses (must be > 0)
    /// * `weight` - Number of impulses per weighted impulse (must be > 0)
    ///
    /// # Example
    /// ```
    /// use pupilsynth::generator::{ImpulseTrainGenerator, SignalGenerator};
    ///
    /// let train = ImpulseTrainGenerator::new(1000, 3).generate().unwrap();
    /// assert_eq!(train.len(), 10_000);
    /// assert_eq!(train.samples()[0], 2.0);
    /// assert_eq!(train.samples()[1000], 1.0);
    /// ```
    pub fn new(impulse_ioi: usize, weight: usize) -> Self {
        Self {
            impulse_ioi,
            weight,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    /// Tag the generated train with a different sampling rate
    ///
    /// The train length stays at `IMPULSE_TRAIN_LEN` samples.
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

impl SignalGenerator for ImpulseTrainGenerator {
    fn generate(&self) -> Result<Signal> {
        if self.impulse_ioi == 0 {
            return Err(PrfError::InvalidArgument(
                "impulse IOI must be a positive number of samples".into(),
            ));
        }
        if self.weight == 0 {
            return Err(PrfError::InvalidArgument(
                "weight must be a positive integer".into(),
            ));
        }

        let mut samples = vec![0.0; IMPULSE_TRAIN_LEN];
        for sample in samples.iter_mut().step_by(self.impulse_ioi) {
            *sample = IMPULSE;
        }

        // An overflowing period can only ever hit sample 0
        let weighted_period = self
            .impulse_ioi
            .checked_mul(self.weight)
            .unwrap_or(IMPULSE_TRAIN_LEN);
        for sample in samples.iter_mut().step_by(weighted_period) {
            *sample = WEIGHTED_IMPULSE;
        }

        debug!(
            impulse_ioi = self.impulse_ioi,
            weight = self.weight,
            len = samples.len(),
            "generated impulse train"
        );
        Ok(Signal::new(samples, self.sample_rate))
    }
}
