//! Sampled signal container
//!
//! A `Signal` is an immutable run of `f64` samples tagged with the sampling
//! rate they were produced at. Every stage of the pipeline hands one of these
//! to the next.

/// Default sampling rate used throughout the demo (1 sample per millisecond)
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;

/// A fixed-length sequence of samples at a known sampling rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl Signal {
    /// Wrap a sample buffer
    ///
    /// # Arguments
    /// * `samples` - Sample values, index 0 is time 0
    /// * `sample_rate` - Sampling rate in Hz
    ///
    /// # Example
    /// ```
    /// use pupilsynth::signal::Signal;
    ///
    /// let signal = Signal::new(vec![0.0, 1.0, 0.0], 1000.0);
    /// assert_eq!(signal.len(), 3);
    /// ```
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time in seconds of the sample at `index`
    pub fn time_of(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate
    }

    /// Total duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.time_of(self.samples.len())
    }

    /// Largest sample value, or `None` for an empty signal
    pub fn peak(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    /// Copy of this signal divided by its peak
    ///
    /// Signals whose peak is zero or negative are returned unchanged. This is
    /// the external normalization needed to compare kernels of different
    /// modes; nothing in the pipeline applies it implicitly.
    pub fn normalized(&self) -> Signal {
        match self.peak() {
            Some(peak) if peak > 0.0 => Signal {
                samples: self.samples.iter().map(|&s| s / peak).collect(),
                sample_rate: self.sample_rate,
            },
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signal_timing() {
        let signal = Signal::new(vec![0.0; 2500], 1000.0);
        assert_eq!(signal.len(), 2500);
        assert_relative_eq!(signal.time_of(1000), 1.0);
        assert_relative_eq!(signal.duration_secs(), 2.5);
    }

    #[test]
    fn test_signal_peak() {
        let signal = Signal::new(vec![0.5, 3.0, -1.0, 2.0], 1000.0);
        assert_eq!(signal.peak(), Some(3.0));

        let empty = Signal::new(Vec::new(), 1000.0);
        assert!(empty.is_empty());
        assert_eq!(empty.peak(), None);
    }

    #[test]
    fn test_signal_normalized() {
        let signal = Signal::new(vec![0.0, 2.0, 4.0], 500.0);
        let normalized = signal.normalized();
        assert_eq!(normalized.samples(), &[0.0, 0.5, 1.0]);
        assert_eq!(normalized.sample_rate(), 500.0);

        // Flat zero signal is left alone
        let zeros = Signal::new(vec![0.0; 4], 1000.0);
        assert_eq!(zeros.normalized(), zeros);
    }
}
