//! Utility modules for signal processing
//!
//! Low-level helpers used by the analysis code.

pub mod fft;

pub use fft::Fft;
