use crate::{Complex, Direction, Float};

/// Direct R-point DFT over `roots.len()` samples spaced `stride` apart.
///
/// `roots[m]` holds the forward root `W_R^m`. The inverse reads input `rr` from slot
/// `(R - rr) mod R` instead of conjugating the roots.
#[inline(always)]
pub(super) fn butterfly_generic<T: Float>(
    data: &mut [Complex<T>],
    idx0: usize,
    stride: usize,
    direction: Direction,
    roots: &[Complex<T>],
    scratch: &mut [Complex<T>],
) {
    let radix = roots.len();

    for (r, out) in scratch.iter_mut().enumerate().take(radix) {
        let mut acc = data[idx0];
        for rr in 1..radix {
            let src = match direction {
                Direction::Forward => rr,
                Direction::Inverse => radix - rr,
            };
            acc += roots[(r * rr) % radix] * data[idx0 + src * stride];
        }
        *out = acc;
    }

    for (r, &value) in scratch.iter().enumerate().take(radix) {
        data[idx0 + r * stride] = value;
    }
}
