use crate::{Complex, Direction, Float};

/// Radix-8 butterfly on eight samples spaced `stride` apart.
///
/// Every coefficient `W_8^m` is either an axis rotation (`rot90`, `rot180`, `rot270`) or an
/// axis rotation of the shared 45° factor `(1/√2, 1/√2)`, so the odd inputs are rotated by
/// 45° once and reused.
///
/// The inverse keeps the coefficients and reads input `k` from slot `(8 - k) mod 8`.
#[inline(always)]
pub(super) fn butterfly_8<T: Float>(
    data: &mut [Complex<T>],
    idx0: usize,
    stride: usize,
    direction: Direction,
) {
    let mut x = [Complex::<T>::default(); 8];
    for (k, slot) in x.iter_mut().enumerate() {
        let src = match direction {
            Direction::Forward => k,
            Direction::Inverse => (8 - k) % 8,
        };
        *slot = data[idx0 + src * stride];
    }
    let [in0, in1, in2, in3, in4, in5, in6, in7] = x;

    let rot45 = Complex::new(T::FRAC_1_SQRT_2, T::FRAC_1_SQRT_2);
    let w1 = in1 * rot45;
    let w3 = in3 * rot45;
    let w5 = in5 * rot45;
    let w7 = in7 * rot45;

    let sum04 = in0 + in4;
    let diff04 = in0 - in4;
    let sum26 = in2 + in6;

    let out0 = sum04 + sum26 + in1 + in3 + in5 + in7;
    let out1 = diff04 + w1.rot270() + in2.rot270() - w3 + w5.rot90() + in6.rot90() + w7;
    let out2 = sum04 - sum26 + in1.rot270() + in3.rot90() + in5.rot270() + in7.rot90();
    let out3 = diff04 - w1 + in2.rot90() + w3.rot270() + w5 + in6.rot270() + w7.rot90();
    let out4 = sum04 + sum26 - in1 - in3 - in5 - in7;
    let out5 = diff04 + w1.rot90() + in2.rot270() + w3 + w5.rot270() + in6.rot90() - w7;
    let out6 = sum04 - sum26 + in1.rot90() + in3.rot270() + in5.rot90() + in7.rot270();
    let out7 = diff04 + w1 + in2.rot90() + w3.rot90() - w5 + in6.rot270() + w7.rot270();

    let out = [out0, out1, out2, out3, out4, out5, out6, out7];
    for (k, value) in out.into_iter().enumerate() {
        data[idx0 + k * stride] = value;
    }
}
