use hound::{SampleFormat, WavReader};
use log::info;
use radix_fft::Complex64;

/// Reads the first `len` frames of the first channel as a complex signal.
///
/// Integer PCM is normalized to `[-1, 1]`, float samples are taken as they are.
pub(crate) fn read_signal(path: &str, len: usize) -> Result<Vec<Complex64>, String> {
    let mut reader =
        WavReader::open(path).map_err(|error| format!("Error opening {path}: {error}"))?;
    let spec = reader.spec();

    info!(
        "{path}: {} Hz, {} channels, {} bits, {:?}",
        spec.sample_rate, spec.channels, spec.bits_per_sample, spec.sample_format
    );

    let channels = (spec.channels as usize).max(1);

    let samples: Result<Vec<f64>, hound::Error> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .take(len)
            .map(|s| s.map(f64::from))
            .collect(),
        SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .step_by(channels)
                .take(len)
                .map(|s| s.map(|value| value as f64 / max_value))
                .collect()
        }
    };
    let samples = samples.map_err(|error| format!("Error decoding {path}: {error}"))?;

    if samples.len() < len {
        return Err(format!(
            "N must not exceed the number of samples in the file (N={len}, samples={})",
            samples.len()
        ));
    }

    Ok(samples.into_iter().map(Complex64::from_real).collect())
}
