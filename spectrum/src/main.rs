use std::{
    cmp::Ordering,
    fmt::Display,
    time::{Duration, Instant},
};

use clap::Parser;
use log::debug;
use radix_fft::{Complex64, Forward, Inverse, RadixFft, reference_transform};
use rand_aes::tls::rand_f32;

mod wav;

/// Allowed deviation from the reference DFT and from the original signal.
const CHECK_TOLERANCE: f64 = 1e-6;

/// Repetitions in benchmark mode; the median is reported.
const BENCH_REPETITIONS: usize = 99;

#[derive(Parser, Debug)]
#[command(name = "spectrum")]
#[command(about = "Compute the spectrum of a WAV file or a random signal", long_about = None)]
struct Cli {
    /// FFT size, must be a power of the radix.
    #[arg(short = 'n', long, default_value_t = 1024)]
    size: usize,
    /// Butterfly radix.
    #[arg(short = 'r', long, default_value_t = 2)]
    radix: usize,
    /// WAV file to read the signal from (first channel). Random input otherwise.
    #[arg(short = 'f', long, value_name = "WAV")]
    file: Option<String>,
    /// Compare against the direct DFT and check the inverse round-trip.
    #[arg(long)]
    check: bool,
    /// Print the K strongest frequency bins.
    #[arg(long, value_name = "K")]
    top: Option<usize>,
    /// Time FFT and direct DFT over repeated runs.
    #[arg(short = 'b', long)]
    bench: bool,
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn random_signal(len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|_| Complex64::new(rand_f32() as f64 * 2.0 - 1.0, rand_f32() as f64 * 2.0 - 1.0))
        .collect()
}

fn median(durations: &mut [Duration]) -> Duration {
    durations.sort();
    durations[durations.len() / 2]
}

fn max_error(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (*x - *y).norm())
        .fold(0.0, f64::max)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let fft =
        RadixFft::<f64, Forward>::new(cli.size, cli.radix).unwrap_or_else(|error| fail(error));
    let ifft =
        RadixFft::<f64, Inverse>::new(cli.size, cli.radix).unwrap_or_else(|error| fail(error));

    let input = match &cli.file {
        Some(path) => wav::read_signal(path, cli.size).unwrap_or_else(|error| fail(error)),
        None => random_signal(cli.size),
    };
    debug!("input: {} samples", input.len());

    let repetitions = if cli.bench { BENCH_REPETITIONS } else { 1 };
    print!("Running {}-point radix-{} FFT", cli.size, cli.radix);
    if cli.bench {
        print!(" {repetitions} times");
    }
    println!(".");

    let mut spectrum = input.clone();
    let mut fft_times = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        spectrum.copy_from_slice(&input);
        let start = Instant::now();
        fft.process(&mut spectrum).unwrap_or_else(|error| fail(error));
        fft_times.push(start.elapsed());
    }

    if cli.check || cli.bench {
        let mut dft_times = Vec::with_capacity(repetitions);
        let mut reference = Vec::new();
        for _ in 0..repetitions {
            let start = Instant::now();
            reference = reference_transform(&input);
            dft_times.push(start.elapsed());
        }

        if cli.bench {
            println!("DFT: {} us.", median(&mut dft_times).as_micros());
            println!("FFT: {} us.", median(&mut fft_times).as_micros());
        }

        if cli.check {
            let dft_error = max_error(&spectrum, &reference);
            println!("DFT vs. FFT: max error {dft_error:.3e}");

            let mut restored = spectrum.clone();
            ifft.process(&mut restored).unwrap_or_else(|error| fail(error));
            let round_trip_error = max_error(&restored, &input);
            println!("FFT-IFFT: max error {round_trip_error:.3e}");

            if dft_error > CHECK_TOLERANCE || round_trip_error > CHECK_TOLERANCE {
                fail("check failed");
            }
        }
    }

    if let Some(count) = cli.top {
        let mut bins: Vec<usize> = (0..spectrum.len()).collect();
        bins.sort_by(|&a, &b| {
            spectrum[b]
                .cmp_magnitude(&spectrum[a])
                .unwrap_or(Ordering::Equal)
        });

        println!("Strongest bins:");
        for &bin in bins.iter().take(count) {
            let value = spectrum[bin];
            println!(
                "  bin {bin:>6}: |X| = {:>12.4}, phase = {:>7.4} rad ({value})",
                value.norm(),
                value.arg()
            );
        }
    }

    println!("Done.");
}
