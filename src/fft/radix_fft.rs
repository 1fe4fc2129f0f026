use alloc::vec::Vec;
use core::marker::PhantomData;

use log::debug;

use super::{
    Butterfly, Direction, TwiddleTable, cooley_tukey::run_stages, digit_reversal::swap_pairs,
    stage_count,
};
use crate::{Complex, FftError, Float};

/// Marker type for forward FFT direction.
pub struct Forward;

/// Marker type for inverse FFT direction.
pub struct Inverse;

/// Selects the direction of a [`RadixFft`] at the type level.
pub trait FftDirection {
    const DIRECTION: Direction;
}

impl FftDirection for Forward {
    const DIRECTION: Direction = Direction::Forward;
}

impl FftDirection for Inverse {
    const DIRECTION: Direction = Direction::Inverse;
}

/// Reusable radix-R FFT of a fixed length.
///
/// Generic over the sample type (`f32` or `f64`) and the direction type (`Forward` or
/// `Inverse`).
///
/// # Normalization
///
///  - Forward FFT produces raw DFT values (no scaling applied)
///  - Inverse FFT divides by `len()`, so a forward+inverse round-trip restores the input
///
/// # Optimizations
///  - Twiddle factors and the butterfly's roots of unity are computed once at construction
///  - The digit-reversal permutation is stored as a list of swaps
///  - Radix 2, 4 and 8 use closed-form butterflies; other radices a direct R-point DFT
pub struct RadixFft<T, D> {
    len: usize,
    radix: usize,
    stages: u32,
    butterfly: Butterfly<T>,
    twiddles: TwiddleTable<T>,
    swaps: Vec<(usize, usize)>,
    _direction: PhantomData<D>,
}

impl<T: Float, D: FftDirection> RadixFft<T, D> {
    /// Constructs a new [`RadixFft`] instance.
    ///
    /// # Arguments
    /// * `len` - Transform length, must be `radix^k` for some `k >= 0`
    /// * `radix` - Butterfly width, at least 2
    pub fn new(len: usize, radix: usize) -> Result<Self, FftError> {
        let stages = stage_count(len, radix)?;
        let butterfly = Butterfly::for_radix(radix);
        let twiddles = TwiddleTable::new(len);
        let swaps = swap_pairs(len, radix);

        debug!(
            "planned {:?} radix-{radix} FFT of length {len}: {stages} stages, {} swaps",
            D::DIRECTION,
            swaps.len()
        );

        Ok(Self {
            len,
            radix,
            stages,
            butterfly,
            twiddles,
            swaps,
            _direction: PhantomData,
        })
    }

    /// Returns the transform length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the shortest transform has one sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    /// Returns the number of butterfly stages, `log_radix(len)`.
    pub fn stages(&self) -> u32 {
        self.stages
    }

    /// Transforms `data` in place, leaving the result in natural order.
    ///
    /// # Errors
    /// [`FftError::LengthMismatch`] if `data.len()` differs from [`len()`](Self::len).
    pub fn process(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        if data.len() != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                actual: data.len(),
            });
        }

        run_stages(data, &self.butterfly, &self.twiddles, D::DIRECTION);

        for &(a, b) in &self.swaps {
            data.swap(a, b);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};

    use super::*;
    use crate::{
        Complex32, Complex64, reference_inverse_transform, reference_transform, reorder,
        transform,
        fft::test_helpers::{assert_complex_arrays_approx_eq, random_signal},
    };

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_accessors() {
        let fft = RadixFft::<f64, Forward>::new(4096, 8).unwrap();
        assert_eq!(fft.len(), 4096);
        assert!(!fft.is_empty());
        assert_eq!(fft.radix(), 8);
        assert_eq!(fft.stages(), 4);
    }

    #[test]
    fn test_butterfly_is_built_with_plan() {
        let fft = RadixFft::<f64, Forward>::new(243, 3).unwrap();
        assert!(matches!(fft.butterfly, Butterfly::Generic(_)));
        assert_eq!(fft.butterfly.radix(), 3);
        assert_eq!(fft.butterfly.scratch().len(), 3);

        let fft = RadixFft::<f64, Inverse>::new(64, 8).unwrap();
        assert!(matches!(fft.butterfly, Butterfly::Radix8));
        assert!(fft.butterfly.scratch().is_empty());
    }

    #[test]
    fn test_rejects_invalid_plan() {
        assert_eq!(
            RadixFft::<f64, Forward>::new(48, 4).err(),
            Some(FftError::InvalidSize { len: 48, radix: 4 })
        );
        assert_eq!(
            RadixFft::<f32, Inverse>::new(16, 1).err(),
            Some(FftError::InvalidRadix { radix: 1 })
        );
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let fft = RadixFft::<f64, Forward>::new(16, 2).unwrap();
        let mut data = vec![Complex64::zero(); 8];
        assert_eq!(
            fft.process(&mut data),
            Err(FftError::LengthMismatch {
                expected: 16,
                actual: 8
            })
        );
    }

    #[test]
    fn test_matches_free_functions() {
        for (len, radix) in [(64, 2), (64, 4), (512, 8), (81, 3)] {
            let input = random_signal::<f64>(len);

            let mut expected = input.clone();
            transform(&mut expected, radix, Direction::Forward).unwrap();
            reorder(&mut expected, radix).unwrap();

            let mut planned = input.clone();
            RadixFft::<f64, Forward>::new(len, radix)
                .unwrap()
                .process(&mut planned)
                .unwrap();

            assert_eq!(planned, expected, "len {len}, radix {radix}");
        }
    }

    #[test]
    fn test_vs_naive_dft() {
        for (len, radix) in [(8, 2), (256, 4), (64, 8), (125, 5), (256, 16)] {
            let input = random_signal::<f64>(len);
            let expected = reference_transform(&input);

            let fft = RadixFft::<f64, Forward>::new(len, radix).unwrap();
            let mut output = input.clone();
            fft.process(&mut output).unwrap();

            let context = format!("len {len}, radix {radix}");
            assert_complex_arrays_approx_eq(&output, &expected, EPSILON, &context);
        }
    }

    #[test]
    fn test_inverse_vs_naive_dft() {
        for (len, radix) in [(32, 2), (64, 4), (64, 8), (49, 7)] {
            let input = random_signal::<f64>(len);
            let expected = reference_inverse_transform(&input);

            let ifft = RadixFft::<f64, Inverse>::new(len, radix).unwrap();
            let mut output = input.clone();
            ifft.process(&mut output).unwrap();

            let context = format!("len {len}, radix {radix}");
            assert_complex_arrays_approx_eq(&output, &expected, EPSILON, &context);
        }
    }

    #[test]
    fn test_round_trip() {
        for (len, radix) in [(1024, 2), (1024, 4), (4096, 8), (729, 3)] {
            let input = random_signal::<f64>(len);
            let fft = RadixFft::<f64, Forward>::new(len, radix).unwrap();
            let ifft = RadixFft::<f64, Inverse>::new(len, radix).unwrap();

            let mut data = input.clone();
            fft.process(&mut data).unwrap();
            ifft.process(&mut data).unwrap();

            let context = format!("len {len}, radix {radix}");
            assert_complex_arrays_approx_eq(&data, &input, 1e-12, &context);
        }
    }

    #[test]
    fn test_plan_is_reusable() {
        let fft = RadixFft::<f64, Forward>::new(64, 4).unwrap();
        let input = random_signal::<f64>(64);

        let mut first = input.clone();
        fft.process(&mut first).unwrap();
        let mut second = input.clone();
        fft.process(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_precision() {
        let len = 4096;
        let input = random_signal::<f32>(len);
        let widened: Vec<Complex64> = input
            .iter()
            .map(|x| Complex64::new(x.re as f64, x.im as f64))
            .collect();
        let expected = reference_transform(&widened);

        for radix in [2, 4, 8, 16] {
            let fft = RadixFft::<f32, Forward>::new(len, radix).unwrap();
            let mut output: Vec<Complex32> = input.clone();
            fft.process(&mut output).unwrap();

            let output: Vec<Complex64> = output
                .iter()
                .map(|x| Complex64::new(x.re as f64, x.im as f64))
                .collect();
            let context = format!("f32, radix {radix}");
            assert_complex_arrays_approx_eq(&output, &expected, 1e-3, &context);
        }
    }

    #[test]
    fn test_sine_wave() {
        // A complex exponential at bin k has energy only at bin k.
        let len = 64;
        let k = 5;
        let input: Vec<Complex64> = (0..len)
            .map(|i| {
                let angle = 2.0 * core::f64::consts::PI * (k * i) as f64 / len as f64;
                Complex64::new(angle.cos(), angle.sin())
            })
            .collect();

        let fft = RadixFft::<f64, Forward>::new(len, 4).unwrap();
        let mut output = input;
        fft.process(&mut output).unwrap();

        for (bin, x) in output.iter().enumerate() {
            let expected = if bin == k { len as f64 } else { 0.0 };
            assert!((x.norm() - expected).abs() < EPSILON, "bin {bin}: {x}");
        }
    }
}
