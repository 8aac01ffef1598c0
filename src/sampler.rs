//! Grid sampling with optional display jitter
//!
//! The guide's figures scatter sampled points on top of the continuous
//! curve; perfectly aligned dots stack into what looks like a solid line, so
//! the figures nudge each point slightly in time and amplitude. That jitter
//! is purely a display-domain perturbation: the nominal grid spacing, and
//! the sample rate handed to spectral analysis, are never derived from the
//! jittered timestamps.
//!
//! The random source is injected per call. Seeding it (the tests use a
//! `Pcg32`) makes the emitted points reproducible.

use rand::Rng;

use crate::{FourierError, Result};

/// Ordered (time, value) pairs produced by sampling a signal
#[derive(Debug, Clone)]
pub struct SampleSet {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSet {
    /// Get the emitted sample times
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Get the emitted sample values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over (time, value) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Pick `count` distinct points without replacement, in time order
    ///
    /// Used to thin a dense sample set before scatter-plotting it. `count`
    /// larger than the set is clamped to the whole set.
    pub fn random_subset<R>(&self, count: usize, rng: &mut R) -> SampleSet
    where
        R: Rng + ?Sized,
    {
        let count = count.min(self.len());
        let mut indices = rand::seq::index::sample(rng, self.len(), count).into_vec();
        indices.sort_unstable();

        SampleSet {
            times: indices.iter().map(|&i| self.times[i]).collect(),
            values: indices.iter().map(|&i| self.values[i]).collect(),
        }
    }
}

/// Sample a signal over a nominal grid, optionally jittering each point
///
/// For each grid time `t`, the emitted time is `t + δ` with `δ` drawn
/// uniformly from `[-0.5, 0.5) · sample_interval · time_jitter_fraction`,
/// and the emitted value is `eval(t + δ) + ε` with `ε` drawn uniformly from
/// `[-amplitude_jitter, amplitude_jitter)`. With both jitter parameters at
/// 0 the emitted times equal the grid exactly and values are unperturbed.
///
/// The random source is consumed once per point for each jitter dimension
/// regardless of the magnitudes, so a seeded source replays identically
/// across parameter choices.
///
/// # Arguments
/// * `eval` - Signal evaluation function, e.g. `|t| signal.value_at(t)`
/// * `grid` - Nominal sample times
/// * `sample_interval` - Nominal grid spacing `1/fs` (finite, > 0)
/// * `time_jitter_fraction` - Horizontal jitter as a fraction of the interval (>= 0)
/// * `amplitude_jitter` - Bound on the additive vertical jitter (>= 0)
/// * `rng` - Injected random source
///
/// # Errors
/// `InvalidParameter` if the interval is non-positive or non-finite, or
/// either jitter magnitude is negative or non-finite.
pub fn sample<F, R>(
    eval: F,
    grid: &[f64],
    sample_interval: f64,
    time_jitter_fraction: f64,
    amplitude_jitter: f64,
    rng: &mut R,
) -> Result<SampleSet>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    if !sample_interval.is_finite() || sample_interval <= 0.0 {
        return Err(FourierError::InvalidParameter(format!(
            "sample interval must be finite and positive, got {sample_interval}"
        )));
    }
    if !time_jitter_fraction.is_finite() || time_jitter_fraction < 0.0 {
        return Err(FourierError::InvalidParameter(format!(
            "time jitter fraction must be finite and non-negative, got {time_jitter_fraction}"
        )));
    }
    if !amplitude_jitter.is_finite() || amplitude_jitter < 0.0 {
        return Err(FourierError::InvalidParameter(format!(
            "amplitude jitter must be finite and non-negative, got {amplitude_jitter}"
        )));
    }

    let mut times = Vec::with_capacity(grid.len());
    let mut values = Vec::with_capacity(grid.len());
    for &t in grid {
        let delta = (rng.gen::<f64>() - 0.5) * sample_interval * time_jitter_fraction;
        let epsilon = (rng.gen::<f64>() - 0.5) * 2.0 * amplitude_jitter;
        let jittered = t + delta;
        times.push(jittered);
        values.push(eval(jittered) + epsilon);
    }

    Ok(SampleSet { times, values })
}
