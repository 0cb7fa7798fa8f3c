pub mod impulse;
pub mod prf;

pub use impulse::ImpulseTrainGenerator;
pub use prf::{PrfGenerator, ResponseMode};

use crate::error::Result;
use crate::signal::Signal;

/// Core trait for the signal generators
///
/// A generator holds its parameters and builds a complete `Signal` in one
/// call. Generators carry no state between calls, so calling `generate`
/// twice yields identical signals.
pub trait SignalGenerator {
    /// Build the signal described by this generator's parameters
    ///
    /// # Returns
    /// * `Ok(Signal)` with the generated samples
    /// * `Err(PrfError::InvalidArgument)` if the parameters are out of range
    fn generate(&self) -> Result<Signal>;
}
