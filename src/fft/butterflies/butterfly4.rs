use crate::{Complex, Direction, Float};

/// Radix-4 butterfly on four samples spaced `stride` apart.
///
/// Forward:
/// y[0] = x[0] + x[1] + x[2] + x[3]
/// y[1] = x[0] - j*x[1] - x[2] + j*x[3]
/// y[2] = x[0] - x[1] + x[2] - x[3]
/// y[3] = x[0] + j*x[1] - x[2] - j*x[3]
///
/// The inverse swaps y[1] and y[3], which flips the sign of the `j` terms.
#[inline(always)]
pub(super) fn butterfly_4<T: Float>(
    data: &mut [Complex<T>],
    idx0: usize,
    stride: usize,
    direction: Direction,
) {
    let idx1 = idx0 + stride;
    let idx2 = idx0 + 2 * stride;
    let idx3 = idx0 + 3 * stride;

    let x0 = data[idx0];
    let x1 = data[idx1];
    let x2 = data[idx2];
    let x3 = data[idx3];

    let sum02 = x0 + x2;
    let diff02 = x0 - x2;
    let sum13 = x1 + x3;
    // j * (x1 - x3)
    let diff13 = (x1 - x3).rot90();

    data[idx0] = sum02 + sum13;
    data[idx2] = sum02 - sum13;

    match direction {
        Direction::Forward => {
            data[idx1] = diff02 - diff13;
            data[idx3] = diff02 + diff13;
        }
        Direction::Inverse => {
            data[idx1] = diff02 + diff13;
            data[idx3] = diff02 - diff13;
        }
    }
}
