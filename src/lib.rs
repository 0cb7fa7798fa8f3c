//! Pupil response sandbox
//!
//! Synthesizes a train of button-press impulses, convolves it with the
//! pupil response function (PRF) and renders the impulse train, the kernel
//! and the predicted pupil trace.
//!
//! - [`generator`]: impulse train and PRF kernel generators
//! - [`convolve`]: direct-form linear convolution
//! - [`pipeline`]: runs the generators and the convolution for one input set
//! - [`plot`]: SVG rendering of the resulting signals

pub mod convolve;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod plot;
pub mod signal;

pub use error::{PrfError, Result};
pub use signal::Signal;
