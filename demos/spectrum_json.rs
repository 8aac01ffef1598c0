//! Output a pure tone's normalized spectrum as JSON for the plotting layer.
//!
//! Usage: spectrum_json <frequency_hz> <amplitude> <sample_rate> <duration>

use fourier_core::{uniform_time_grid, Harmonic, Signal, Spectrum};
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct SpectrumOutput {
    frequency: f64,
    amplitude: f64,
    sample_rate: f64,
    n_samples: usize,
    df: f64,
    peak: Option<(f64, f64)>,
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!(
            "Usage: {} <frequency_hz> <amplitude> <sample_rate> <duration>",
            args[0]
        );
        std::process::exit(1);
    }

    let frequency: f64 = args[1].parse().expect("Invalid frequency");
    let amplitude: f64 = args[2].parse().expect("Invalid amplitude");
    let sample_rate: f64 = args[3].parse().expect("Invalid sample_rate");
    let duration: f64 = args[4].parse().expect("Invalid duration");

    let signal =
        Signal::new(frequency, &[Harmonic::new(1, amplitude)]).expect("invalid tone parameters");

    let n_samples = (sample_rate * duration).round() as usize;
    let grid = uniform_time_grid(duration, n_samples).expect("invalid sampling parameters");
    let values = signal.evaluate(&grid).expect("finite grid");
    let spectrum = Spectrum::from_samples(&values, sample_rate).expect("non-empty samples");

    let output = SpectrumOutput {
        frequency,
        amplitude,
        sample_rate,
        n_samples,
        df: spectrum.df(),
        peak: spectrum.peak(),
        frequencies: spectrum.frequencies().to_vec(),
        magnitudes: spectrum.magnitudes().to_vec(),
    };

    println!("{}", serde_json::to_string(&output).unwrap());
}
