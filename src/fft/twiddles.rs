use alloc::vec::Vec;
use core::f64::consts::PI;

use super::Direction;
use crate::{Complex, Float, float::sin_cos};

/// Computes the twiddle factor `W_n^kn = e^(-2πi·kn/n)`.
///
/// The inverse direction returns the conjugate `e^(+2πi·kn/n)`. The angle is evaluated in
/// double precision and `kn` is reduced modulo `n` first, so large index products keep their
/// accuracy.
///
/// # Panics
/// Panics if `n` is zero.
pub fn twiddle<T: Float>(n: usize, kn: usize, direction: Direction) -> Complex<T> {
    let kn = kn % n;
    let angle = 2.0 * PI * kn as f64 / n as f64;
    let (sin, cos) = sin_cos(angle);
    let w = Complex::new(T::from_f64(cos), T::from_f64(-sin));
    match direction {
        Direction::Forward => w,
        Direction::Inverse => w.conj(),
    }
}

/// Pre-computed forward twiddle factors `W_n^0 .. W_n^(n-1)` for one transform length.
#[derive(Debug, Clone)]
pub struct TwiddleTable<T> {
    factors: Vec<Complex<T>>,
}

impl<T: Float> TwiddleTable<T> {
    /// Builds the table for transforms of length `n`.
    pub fn new(n: usize) -> Self {
        let factors = (0..n).map(|kn| twiddle(n, kn, Direction::Forward)).collect();
        Self { factors }
    }

    /// Number of stored factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns `W_n^kn`, conjugated for the inverse direction.
    ///
    /// # Panics
    /// Panics if the table is empty.
    #[inline(always)]
    pub fn get(&self, kn: usize, direction: Direction) -> Complex<T> {
        let w = self.factors[kn % self.factors.len()];
        match direction {
            Direction::Forward => w,
            Direction::Inverse => w.conj(),
        }
    }
}
