//! Dump the harmonic-sum figure series as JSON for the plotting layer.
//!
//! Emits the per-harmonic components, the dense curve standing in for the
//! continuous waveform, the jittered display samples, and the spectrum of
//! the cleanly sampled sum.
//!
//! Usage: harmonic_sum_json [seed]

use fourier_core::{sampler, uniform_time_grid, Harmonic, Signal, Spectrum};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;
use std::env;

#[derive(Serialize)]
struct FigureOutput {
    f0: f64,
    sample_rate: f64,
    components: Vec<ComponentSeries>,
    continuous: Series,
    sampled: Series,
    spectrum: Series,
}

#[derive(Serialize)]
struct ComponentSeries {
    harmonic: u32,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [seed]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = if args.len() == 2 {
        args[1].parse().expect("Invalid seed")
    } else {
        42
    };

    let signal = Signal::new(
        5.0,
        &[
            Harmonic::new(1, 1.0),
            Harmonic::new(2, 0.6),
            Harmonic::new(3, 0.35),
            Harmonic::new(4, 0.2),
        ],
    )
    .expect("valid harmonic spec");

    let duration = 1.0;

    // Dense curve standing in for the continuous waveform
    let t_continuous = uniform_time_grid(duration, 1000).expect("valid grid");
    let continuous = signal.evaluate(&t_continuous).expect("finite grid");
    let components = signal.evaluate_components(&t_continuous).expect("finite grid");

    // Display samples: coarse grid, jittered so the dots read as points
    let display_rate = 30.0;
    let t_display = uniform_time_grid(duration, 30).expect("valid grid");
    let mut rng = Pcg32::seed_from_u64(seed);
    let sampled = sampler::sample(
        |t| signal.value_at(t),
        &t_display,
        1.0 / display_rate,
        0.5,
        0.0,
        &mut rng,
    )
    .expect("valid jitter parameters");

    // Analysis samples: clean uniform grid at the nominal rate
    let sample_rate = 100.0;
    let t_analysis = uniform_time_grid(duration, 100).expect("valid grid");
    let values = signal.evaluate(&t_analysis).expect("finite grid");
    let spectrum = Spectrum::from_samples(&values, sample_rate).expect("non-empty samples");

    let output = FigureOutput {
        f0: signal.f0(),
        sample_rate,
        components: components
            .into_iter()
            .map(|(harmonic, values)| ComponentSeries { harmonic, values })
            .collect(),
        continuous: Series {
            x: t_continuous,
            y: continuous,
        },
        sampled: Series {
            x: sampled.times().to_vec(),
            y: sampled.values().to_vec(),
        },
        spectrum: Series {
            x: spectrum.frequencies().to_vec(),
            y: spectrum.magnitudes().to_vec(),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap());
}
