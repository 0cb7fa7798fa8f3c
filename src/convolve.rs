//! Direct-form linear convolution
//!
//! The output buffer is `signal.len() + kernel.len()` long, one sample more
//! than the minimal `n + m - 1`. The extra trailing sample is always zero.

use tracing::debug;

use crate::error::{PrfError, Result};
use crate::signal::Signal;

/// Convolve `signal` with `kernel`
///
/// Accumulates `signal[i] * kernel[j]` into `output[i + j]` with `i` in the
/// outer loop, so the summation order is fixed.
///
/// # Returns
/// * `Err(PrfError::InvalidArgument)` if either input is empty
///
/// # Example
/// ```
/// use pupilsynth::convolve::convolve;
///
/// let out = convolve(&[1.0, 0.0], &[2.0, 3.0]).unwrap();
/// assert_eq!(out, vec![2.0, 3.0, 0.0, 0.0]);
/// ```
pub fn convolve(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() || kernel.is_empty() {
        return Err(PrfError::InvalidArgument(
            "cannot convolve an empty sequence".into(),
        ));
    }

    let mut output = vec![0.0; signal.len() + kernel.len()];
    for (i, &s) in signal.iter().enumerate() {
        for (out, &k) in output[i..i + kernel.len()].iter_mut().zip(kernel) {
            *out += s * k;
        }
    }

    debug!(
        signal_len = signal.len(),
        kernel_len = kernel.len(),
        len = output.len(),
        "convolved"
    );
    Ok(output)
}

/// Convolve two signals, keeping the sampling rate of `signal`
pub fn convolve_signals(signal: &Signal, kernel: &Signal) -> Result<Signal> {
    let samples = convolve(signal.samples(), kernel.samples())?;
    Ok(Signal::new(samples, signal.sample_rate()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convolve_basic() {
        let out = convolve(&[1.0, 0.0], &[2.0, 3.0]).unwrap();
        assert_eq!(out, vec![2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_convolve_overlap() {
        // (1 + 2z)(1 + z + z^2) = 1 + 3z + 3z^2 + 2z^3
        let out = convolve(&[1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(out, vec![1.0, 3.0, 3.0, 2.0, 0.0]);
    }

    #[test]
    fn test_convolve_length() {
        for &(n, m) in &[(1, 1), (1, 7), (10, 3), (64, 64)] {
            let out = convolve(&vec![0.5; n], &vec![1.5; m]).unwrap();
            assert_eq!(out.len(), n + m);
            assert_eq!(*out.last().unwrap(), 0.0);
        }
    }

    #[test]
    fn test_convolve_shifted_impulse() {
        let mut signal = vec![0.0; 8];
        signal[3] = 2.0;
        let kernel = [0.25, 0.5, 1.0];
        let out = convolve(&signal, &kernel).unwrap();

        for (i, &v) in out.iter().enumerate() {
            let expected = if (3..6).contains(&i) { 2.0 * kernel[i - 3] } else { 0.0 };
            assert_relative_eq!(v, expected);
        }
    }

    #[test]
    fn test_convolve_rejects_empty() {
        assert!(matches!(
            convolve(&[], &[1.0]),
            Err(PrfError::InvalidArgument(_))
        ));
        assert!(matches!(
            convolve(&[1.0], &[]),
            Err(PrfError::InvalidArgument(_))
        ));
        assert!(matches!(convolve(&[], &[]), Err(PrfError::InvalidArgument(_))));
    }

    #[test]
    fn test_convolve_signals_keeps_rate() {
        let signal = Signal::new(vec![1.0, 1.0], 250.0);
        let kernel = Signal::new(vec![1.0, 2.0, 3.0], 250.0);
        let out = convolve_signals(&signal, &kernel).unwrap();
        assert_eq!(out.sample_rate(), 250.0);
        assert_eq!(out.samples(), &[1.0, 3.0, 5.0, 3.0, 0.0]);
    }
}
