use alloc::vec::Vec;

use super::{Direction, TwiddleTable};
use crate::{Complex, Float};

/// Direct O(N²) summation of the forward DFT.
///
/// Accepts any length and serves as the correctness oracle for the fast transform.
pub fn reference_transform<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    direct_dft(input, Direction::Forward)
}

/// Direct O(N²) summation of the normalized inverse DFT.
pub fn reference_inverse_transform<T: Float>(input: &[Complex<T>]) -> Vec<Complex<T>> {
    let len = T::from_usize(input.len());
    let mut output = direct_dft(input, Direction::Inverse);
    output.iter_mut().for_each(|x| *x = x.unscale(len));
    output
}

fn direct_dft<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let twiddles = TwiddleTable::new(n);

    (0..n)
        .map(|k| {
            let mut acc = Complex::zero();
            let mut kn = 0;
            for &x in input {
                acc += x * twiddles.get(kn, direction);
                kn = (kn + k) % n;
            }
            acc
        })
        .collect()
}
