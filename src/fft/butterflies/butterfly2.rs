use crate::{Complex, Float};

/// Radix-2 butterfly on `data[idx0]` and `data[idx0 + stride]`.
///
/// Identical for both directions: the 2-point DFT kernel is real.
#[inline(always)]
pub(super) fn butterfly_2<T: Float>(data: &mut [Complex<T>], idx0: usize, stride: usize) {
    let idx1 = idx0 + stride;

    let x0 = data[idx0];
    let x1 = data[idx1];

    data[idx0] = x0 + x1;
    data[idx1] = x0 - x1;
}
