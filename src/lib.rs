//! fourier-core: signal synthesis and discrete spectral analysis for Fourier-guide figures
//!
//! This library provides the numeric core shared by the guide's figure
//! scripts: building a sum of harmonic sinusoids, sampling it on a uniform
//! grid (optionally with display jitter), and computing an amplitude-true
//! magnitude spectrum. Plotting is an external concern; everything here
//! produces plain numeric series for a renderer to consume.
//!
//! # Core Types
//!
//! - [`Signal`] - Sum of harmonic sinusoids over continuous time
//! - [`SampleSet`] - Discrete (time, value) pairs from sampling a signal
//! - [`Spectrum`] - Non-negative-frequency magnitude spectrum of a sample set

pub mod sampler;
pub mod signal;
pub mod spectrum;

pub mod utils;

// Re-export main types at crate root
pub use sampler::{sample, SampleSet};
pub use signal::{uniform_time_grid, Harmonic, Signal};
pub use spectrum::Spectrum;

use thiserror::Error;

/// Errors that can occur in fourier-core operations
#[derive(Error, Debug)]
pub enum FourierError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FourierError>;
