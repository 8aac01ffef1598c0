//! Normalized discrete spectrum analysis
//!
//! This module computes the DFT of a uniformly sampled real-valued signal
//! and keeps the non-negative-frequency half, scaled so magnitudes line up
//! with time-domain amplitudes: a sinusoid of amplitude A whose frequency
//! lands exactly on a bin reports magnitude A.

use crate::utils::Fft;
use crate::{FourierError, Result};

/// Magnitude spectrum over the non-negative frequency bins
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, strictly increasing from 0
    frequencies: Vec<f64>,
    /// Amplitude-scaled magnitude per bin
    magnitudes: Vec<f64>,
    /// Frequency resolution (Hz per bin)
    df: f64,
}

impl Spectrum {
    /// Analyze uniformly sampled values at the given sample rate
    ///
    /// The N-point DFT is taken over the values as-is (no padding, no
    /// windowing; N need not be a power of two). Bins `j >= N/2` sit at or
    /// above Nyquist and mirror the lower half for real input, so only bins
    /// `0 .. floor(N/2)` are retained, at `freq_j = j · sample_rate / N`.
    /// Magnitudes are `|X_j| / (N/2)`, except the DC bin which is `|X_0| / N`
    /// since it has no negative-frequency mirror.
    ///
    /// A tone that falls between bin centers spreads across its neighbors
    /// (spectral leakage); that is expected, not an error.
    ///
    /// # Arguments
    /// * `values` - Real-valued samples, uniformly spaced at `1 / sample_rate`
    /// * `sample_rate` - Nominal sample rate in Hz (finite, > 0). With
    ///   jittered sampling this is the nominal grid rate, never one inferred
    ///   from the jittered timestamps.
    ///
    /// # Errors
    /// `InvalidInput` when `values` is empty or `sample_rate` is
    /// non-positive or non-finite.
    pub fn from_samples(values: &[f64], sample_rate: f64) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(FourierError::InvalidInput(
                "cannot analyze an empty sample sequence".to_string(),
            ));
        }
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(FourierError::InvalidInput(format!(
                "sample rate must be finite and positive, got {sample_rate}"
            )));
        }

        let mut fft = Fft::new();
        let coefficients = fft.real_fft(values, n);

        let df = sample_rate / n as f64;
        let n_bins = n / 2;
        let half = n as f64 / 2.0;

        let mut frequencies = Vec::with_capacity(n_bins);
        let mut magnitudes = Vec::with_capacity(n_bins);
        for (j, c) in coefficients.iter().take(n_bins).enumerate() {
            frequencies.push(j as f64 * df);
            let scale = if j == 0 { n as f64 } else { half };
            magnitudes.push(c.norm() / scale);
        }

        Ok(Self {
            frequencies,
            magnitudes,
            df,
        })
    }

    /// Get the number of retained frequency bins (`floor(N/2)`)
    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    /// Get the bin center frequencies in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Get the amplitude-scaled magnitudes
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Get the frequency of a specific bin
    pub fn frequency(&self, bin: usize) -> Option<f64> {
        self.frequencies.get(bin).copied()
    }

    /// Get the magnitude at a specific bin
    pub fn magnitude(&self, bin: usize) -> Option<f64> {
        self.magnitudes.get(bin).copied()
    }

    /// Get the frequency resolution (Hz per bin)
    pub fn df(&self) -> f64 {
        self.df
    }

    /// Get the bin with the largest magnitude, as (frequency, magnitude)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(bin, &magnitude)| (self.frequencies[bin], magnitude))
    }

    /// Iterate over (frequency, magnitude) pairs
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn tone(amplitude: f64, frequency: f64, sample_rate: f64, count: usize) -> Vec<f64> {
        (0..count)
            .map(|n| amplitude * (2.0 * PI * frequency * n as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_single_tone_round_trip() {
        // 15 Hz tone sampled at 100 Hz over one second: 15 whole periods,
        // so the tone sits exactly on bin 15.
        let amplitude = 0.8;
        let values = tone(amplitude, 15.0, 100.0, 100);
        let spectrum = Spectrum::from_samples(&values, 100.0).unwrap();

        assert_relative_eq!(spectrum.magnitude(15).unwrap(), amplitude, epsilon = 0.008);
        assert_abs_diff_eq!(spectrum.magnitude(0).unwrap(), 0.0, epsilon = 0.008);
        assert_relative_eq!(spectrum.frequency(15).unwrap(), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_peak_finds_the_tone() {
        let values = tone(1.0, 20.0, 100.0, 100);
        let spectrum = Spectrum::from_samples(&values, 100.0).unwrap();

        let (freq, magnitude) = spectrum.peak().unwrap();
        assert_relative_eq!(freq, 20.0, epsilon = 1e-12);
        assert_relative_eq!(magnitude, 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_half_spectrum_size_and_monotonic_frequencies() {
        for n in [2, 99, 100, 101, 256] {
            let values = tone(1.0, 5.0, 100.0, n);
            let spectrum = Spectrum::from_samples(&values, 100.0).unwrap();

            assert_eq!(spectrum.num_bins(), n / 2);
            assert_eq!(spectrum.frequency(0), Some(0.0));
            for w in spectrum.frequencies().windows(2) {
                assert!(w[0] < w[1], "frequencies must be strictly increasing");
            }
            assert_relative_eq!(spectrum.df(), 100.0 / n as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dc_bin_reports_the_mean_level() {
        let values = vec![0.7; 64];
        let spectrum = Spectrum::from_samples(&values, 100.0).unwrap();

        assert_relative_eq!(spectrum.magnitude(0).unwrap(), 0.7, epsilon = 1e-10);
        for bin in 1..spectrum.num_bins() {
            assert_abs_diff_eq!(spectrum.magnitude(bin).unwrap(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_off_bin_tone_leaks_into_neighbors() {
        // 7.5 Hz with 1 Hz resolution sits halfway between bins 7 and 8.
        let values = tone(1.0, 7.5, 100.0, 100);
        let spectrum = Spectrum::from_samples(&values, 100.0).unwrap();

        let (peak_freq, peak_magnitude) = spectrum.peak().unwrap();
        assert!((peak_freq - 7.5).abs() <= spectrum.df());
        // Leakage spreads the energy: no single bin carries the full amplitude
        assert!(peak_magnitude < 1.0);
        assert!(spectrum.magnitude(7).unwrap() > 0.1);
        assert!(spectrum.magnitude(8).unwrap() > 0.1);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = Spectrum::from_samples(&[], 100.0).unwrap_err();
        assert!(matches!(err, FourierError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_sample_rate_rejected() {
        for bad_rate in [0.0, -44100.0, f64::NAN, f64::INFINITY] {
            let err = Spectrum::from_samples(&[1.0, 2.0, 3.0], bad_rate).unwrap_err();
            assert!(matches!(err, FourierError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_single_sample_yields_no_bins() {
        let spectrum = Spectrum::from_samples(&[1.0], 100.0).unwrap();
        assert_eq!(spectrum.num_bins(), 0);
        assert!(spectrum.peak().is_none());
    }
}
