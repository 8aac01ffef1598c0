//! FFT wrapper for spectral analysis
//!
//! A thin wrapper around rustfft that handles the real-to-complex buffer
//! conversion for the spectrum code.

use num_complex::Complex;
use rustfft::FftPlanner;

/// FFT processor with cached plans
pub struct Fft {
    planner: FftPlanner<f64>,
}

impl Fft {
    /// Create a new FFT processor
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the DFT of real-valued input
    ///
    /// # Arguments
    /// * `input` - Real-valued input samples
    /// * `output_size` - Size of the transform (zero-padded if larger than input)
    ///
    /// # Returns
    /// Complex-valued coefficients of length `output_size`
    pub fn real_fft(&mut self, input: &[f64], output_size: usize) -> Vec<Complex<f64>> {
        let fft_size = output_size.max(input.len());
        let fft = self.planner.plan_fft_forward(fft_size);

        let mut buffer: Vec<Complex<f64>> = input
            .iter()
            .map(|&x| Complex::new(x, 0.0))
            .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
            .take(fft_size)
            .collect();

        fft.process(&mut buffer);
        buffer
    }
}

impl Default for Fft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_fft_dc() {
        let mut fft = Fft::new();

        // Constant signal should have all energy at DC
        let input = vec![1.0; 8];
        let spectrum = fft.real_fft(&input, 8);

        // DC component should be sum of input
        assert_relative_eq!(spectrum[0].re, 8.0, epsilon = 1e-10);
        assert_relative_eq!(spectrum[0].im, 0.0, epsilon = 1e-10);

        // Other components should be zero
        for i in 1..8 {
            assert_relative_eq!(spectrum[i].norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_fft_sine() {
        let mut fft = Fft::new();

        // Pure sine wave at bin 1
        let n = 16;
        let input: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * i as f64 / n as f64).sin())
            .collect();

        let spectrum = fft.real_fft(&input, n);

        // Energy sits at bin 1 (and n-1 for the conjugate)
        assert!(spectrum[1].norm() > 1.0);
        assert_relative_eq!(spectrum[0].norm(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(spectrum[2].norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_non_power_of_two_sizes_work() {
        let mut fft = Fft::new();

        // A bin-aligned tone at an arbitrary length still lands on its bin
        let n = 100;
        let input: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / n as f64).sin())
            .collect();

        let spectrum = fft.real_fft(&input, n);
        assert_relative_eq!(spectrum[5].norm(), n as f64 / 2.0, epsilon = 1e-8);
    }
}
