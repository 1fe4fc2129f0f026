mod butterflies;
mod cooley_tukey;
mod dft;
mod digit_reversal;
mod radix_fft;
mod twiddles;

pub use butterflies::{Butterfly, GenericButterfly};
pub use cooley_tukey::transform;
pub use dft::{reference_inverse_transform, reference_transform};
pub use digit_reversal::reorder;
pub use radix_fft::{FftDirection, Forward, Inverse, RadixFft};
pub use twiddles::{TwiddleTable, twiddle};

use crate::FftError;

/// Direction of a transform.
///
/// The forward transform is unnormalized, the inverse transform divides every sample by
/// the length once after the last stage. A forward+inverse round-trip restores the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `X[k] = Σ x[n]·e^(-2πi·kn/N)`
    Forward,
    /// `x[n] = 1/N · Σ X[k]·e^(+2πi·kn/N)`
    Inverse,
}

/// Returns the number of stages `k` such that `len == radix^k`.
///
/// A length of one is valid for every radix and needs zero stages.
pub fn stage_count(len: usize, radix: usize) -> Result<u32, FftError> {
    if radix < 2 {
        return Err(FftError::InvalidRadix { radix });
    }

    let mut power = 1usize;
    let mut stages = 0;
    while power < len {
        power = match power.checked_mul(radix) {
            Some(power) => power,
            None => break,
        };
        stages += 1;
    }

    if power != len {
        return Err(FftError::InvalidSize { len, radix });
    }

    Ok(stages)
}
