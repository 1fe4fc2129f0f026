mod butterfly2;
mod butterfly4;
mod butterfly8;
mod butterfly_generic;

use alloc::{vec, vec::Vec};

use butterfly_generic::butterfly_generic;
use butterfly2::butterfly_2;
use butterfly4::butterfly_4;
use butterfly8::butterfly_8;

use super::twiddle;
use crate::{Complex, Direction, Float};

/// The R-point combine step of the transform, selected once per radix.
///
/// Every variant replaces the `radix` samples at `idx0, idx0 + stride, ..,
/// idx0 + (radix - 1) * stride` with their DFT (or inverse DFT, without the `1/N` scaling).
#[derive(Debug, Clone)]
pub enum Butterfly<T> {
    /// Sum and difference.
    Radix2,
    /// Sums/differences with a single `rot90`.
    Radix4,
    /// Closed form built from axis rotations and one shared 45° factor.
    Radix8,
    /// Direct O(R²) DFT for every other radix.
    Generic(GenericButterfly<T>),
}

/// Roots of unity of the generic butterfly.
#[derive(Debug, Clone)]
pub struct GenericButterfly<T> {
    roots: Vec<Complex<T>>,
}

impl<T: Float> GenericButterfly<T> {
    fn new(radix: usize) -> Self {
        let roots = (0..radix)
            .map(|m| twiddle(radix, m, Direction::Forward))
            .collect();
        Self { roots }
    }
}

impl<T: Float> Butterfly<T> {
    /// Selects the butterfly for `radix`: 2, 4 and 8 get specialized variants.
    pub fn for_radix(radix: usize) -> Self {
        match radix {
            2 => Butterfly::Radix2,
            4 => Butterfly::Radix4,
            8 => Butterfly::Radix8,
            _ => Butterfly::Generic(GenericButterfly::new(radix)),
        }
    }

    /// Returns the butterfly width.
    pub fn radix(&self) -> usize {
        match self {
            Butterfly::Radix2 => 2,
            Butterfly::Radix4 => 4,
            Butterfly::Radix8 => 8,
            Butterfly::Generic(generic) => generic.roots.len(),
        }
    }

    /// Allocates the scratch buffer [`apply`](Self::apply) needs. Empty for the closed-form
    /// variants.
    pub fn scratch(&self) -> Vec<Complex<T>> {
        match self {
            Butterfly::Generic(generic) => vec![Complex::zero(); generic.roots.len()],
            _ => Vec::new(),
        }
    }

    /// Applies the butterfly in place.
    ///
    /// `scratch` must hold at least as many samples as [`scratch`](Self::scratch) returns.
    ///
    /// # Panics
    /// Panics if `idx0 + (radix - 1) * stride` is out of bounds or `scratch` is too short.
    #[inline(always)]
    pub fn apply(
        &self,
        data: &mut [Complex<T>],
        idx0: usize,
        stride: usize,
        direction: Direction,
        scratch: &mut [Complex<T>],
    ) {
        match self {
            Butterfly::Radix2 => butterfly_2(data, idx0, stride),
            Butterfly::Radix4 => butterfly_4(data, idx0, stride, direction),
            Butterfly::Radix8 => butterfly_8(data, idx0, stride, direction),
            Butterfly::Generic(generic) => butterfly_generic(
                data,
                idx0,
                stride,
                direction,
                &generic.roots,
                scratch,
            ),
        }
    }
}
