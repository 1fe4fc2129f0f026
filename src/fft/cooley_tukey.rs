use log::trace;

use super::{Butterfly, Direction, TwiddleTable, stage_count};
use crate::{Complex, FftError, Float};

/// Performs an in-place radix-R FFT using the Cooley-Tukey decimation-in-frequency algorithm.
///
/// The input is read in natural order, the output is left in digit-reversed order:
/// call [`reorder`](super::reorder) afterwards to restore natural frequency (or time) order.
///
/// The forward transform is unnormalized. The inverse transform divides every sample by
/// the length once, after the last stage.
///
/// # Errors
/// [`FftError::InvalidRadix`] if `radix < 2`, [`FftError::InvalidSize`] if `data.len()` is
/// not an exact power of `radix`. The buffer is left untouched on error.
pub fn transform<T: Float>(
    data: &mut [Complex<T>],
    radix: usize,
    direction: Direction,
) -> Result<(), FftError> {
    let stages = stage_count(data.len(), radix)?;

    trace!(
        "radix-{radix} {direction:?} transform of {} samples in {stages} stages",
        data.len()
    );

    let twiddles = TwiddleTable::new(data.len());
    let butterfly = Butterfly::for_radix(radix);
    run_stages(data, &butterfly, &twiddles, direction);

    Ok(())
}

/// Runs all stages on a buffer whose length is already known to be a power of the radix.
///
/// Stage `s` (`s = 1, R, R², .., N/R`) consists of `s` groups of `N/(R·s)` butterflies with a
/// stride of `N/(R·s)`. Every butterfly output except the first is then multiplied by
/// `W_N^(n1·i·s)`, which is skipped in the last stage where all factors are one.
pub(crate) fn run_stages<T: Float>(
    data: &mut [Complex<T>],
    butterfly: &Butterfly<T>,
    twiddles: &TwiddleTable<T>,
    direction: Direction,
) {
    let n = data.len();
    let radix = butterfly.radix();
    let mut scratch = butterfly.scratch();

    let mut span = 1;
    while span < n {
        let num_groups = span;
        let num_columns = n / (radix * span);
        let last_stage = span == n / radix;

        for group in 0..num_groups {
            let group_start = group * num_columns * radix;

            for column in 0..num_columns {
                let idx0 = group_start + column;

                butterfly.apply(data, idx0, num_columns, direction, &mut scratch);

                if !last_stage {
                    for i in 1..radix {
                        let idx = idx0 + i * num_columns;
                        data[idx] *= twiddles.get(column * i * span, direction);
                    }
                }
            }
        }

        span *= radix;
    }

    if direction == Direction::Inverse {
        let len = T::from_usize(n);
        data.iter_mut().for_each(|x| *x = x.unscale(len));
    }
}
