//! Harmonic signal construction and evaluation
//!
//! A [`Signal`] is a sum of sinusoids at integer multiples of a fundamental
//! frequency, defined over continuous time:
//!
//! `x(t) = Σ_k amplitude_k · sin(2π · index_k · f0 · t)`
//!
//! Signals are immutable once constructed and evaluated at arbitrary time
//! points; turning them into discrete samples is the sampler's job.

use std::f64::consts::PI;

use crate::{FourierError, Result};

/// One harmonic component: an integer multiple of the fundamental and its amplitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Harmonic index (1 = fundamental, 2 = twice the fundamental, ...)
    pub index: u32,
    /// Peak amplitude of this component
    pub amplitude: f64,
}

impl Harmonic {
    pub fn new(index: u32, amplitude: f64) -> Self {
        Self { index, amplitude }
    }
}

/// A sum of harmonic sinusoids, immutable once constructed
#[derive(Debug, Clone)]
pub struct Signal {
    f0: f64,
    harmonics: Vec<Harmonic>,
}

impl Signal {
    /// Create a signal from a fundamental frequency and a harmonic spec
    ///
    /// # Arguments
    /// * `f0` - Fundamental frequency in Hz (finite, > 0)
    /// * `harmonics` - Ordered components; indices must be distinct and >= 1,
    ///   amplitudes finite (any sign). Indices need not be contiguous or sorted.
    ///
    /// # Errors
    /// `InvalidParameter` if `f0` is non-positive or non-finite, an index is 0,
    /// an index repeats, or an amplitude is non-finite.
    pub fn new(f0: f64, harmonics: &[Harmonic]) -> Result<Self> {
        if !f0.is_finite() || f0 <= 0.0 {
            return Err(FourierError::InvalidParameter(format!(
                "fundamental frequency must be finite and positive, got {f0}"
            )));
        }
        for (i, h) in harmonics.iter().enumerate() {
            if h.index == 0 {
                return Err(FourierError::InvalidParameter(
                    "harmonic index must be at least 1".to_string(),
                ));
            }
            if !h.amplitude.is_finite() {
                return Err(FourierError::InvalidParameter(format!(
                    "amplitude of harmonic {} must be finite, got {}",
                    h.index, h.amplitude
                )));
            }
            if harmonics[..i].iter().any(|prev| prev.index == h.index) {
                return Err(FourierError::InvalidParameter(format!(
                    "duplicate harmonic index {}",
                    h.index
                )));
            }
        }
        Ok(Self {
            f0,
            harmonics: harmonics.to_vec(),
        })
    }

    /// Get the fundamental frequency in Hz
    pub fn f0(&self) -> f64 {
        self.f0
    }

    /// Get the harmonic spec, in construction order
    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Evaluate the signal at a single time point
    pub fn value_at(&self, t: f64) -> f64 {
        self.harmonics
            .iter()
            .map(|h| h.amplitude * (2.0 * PI * h.index as f64 * self.f0 * t).sin())
            .sum()
    }

    /// Evaluate the signal at each of the given time points
    ///
    /// An empty time array yields an empty result. Summation over harmonics is
    /// order-independent, so the output does not depend on how the harmonic
    /// spec was ordered at construction.
    ///
    /// # Errors
    /// `InvalidParameter` if any time point is non-finite.
    pub fn evaluate(&self, times: &[f64]) -> Result<Vec<f64>> {
        check_times(times)?;
        Ok(times.iter().map(|&t| self.value_at(t)).collect())
    }

    /// Evaluate each harmonic's contribution separately
    ///
    /// Returns one `(harmonic_index, series)` entry per component, in
    /// construction order, for figures that render the harmonics
    /// individually. Summing the
    /// series element-wise reproduces [`Signal::evaluate`] within floating
    /// tolerance.
    ///
    /// # Errors
    /// `InvalidParameter` if any time point is non-finite.
    pub fn evaluate_components(&self, times: &[f64]) -> Result<Vec<(u32, Vec<f64>)>> {
        check_times(times)?;
        Ok(self
            .harmonics
            .iter()
            .map(|h| {
                let omega = 2.0 * PI * h.index as f64 * self.f0;
                let series = times.iter().map(|&t| h.amplitude * (omega * t).sin()).collect();
                (h.index, series)
            })
            .collect())
    }
}

fn check_times(times: &[f64]) -> Result<()> {
    if let Some(t) = times.iter().find(|t| !t.is_finite()) {
        return Err(FourierError::InvalidParameter(format!(
            "time points must be finite, got {t}"
        )));
    }
    Ok(())
}

/// Build a uniform time grid covering `[0, duration)`
///
/// Returns `count` evenly spaced points `i · duration / count`. The grid is
/// half-open: it starts at 0 and never includes `duration` itself, so
/// sampling a whole number of signal periods does not repeat the first point.
/// `count = 1` yields the single point 0.
///
/// # Errors
/// `InvalidParameter` if `duration` is non-positive or non-finite, or
/// `count` is 0.
pub fn uniform_time_grid(duration: f64, count: usize) -> Result<Vec<f64>> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(FourierError::InvalidParameter(format!(
            "duration must be finite and positive, got {duration}"
        )));
    }
    if count == 0 {
        return Err(FourierError::InvalidParameter(
            "grid must contain at least one point".to_string(),
        ));
    }
    let step = duration / count as f64;
    Ok((0..count).map(|i| i as f64 * step).collect())
}
