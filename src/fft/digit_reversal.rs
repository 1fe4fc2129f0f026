use alloc::vec::Vec;

use super::stage_count;
use crate::FftError;

/// Reverses the base-`radix` digits of `index` within a transform of length `len`.
///
/// This is the generalization of bit reversal (`radix == 2`) to arbitrary radices.
/// Callers validate `len` and `radix` with [`stage_count`] first.
pub(crate) fn digit_reverse(index: usize, len: usize, radix: usize) -> usize {
    debug_assert!(radix >= 2, "radix {radix} has no digit representation");

    let mut place = 1usize;
    let mut mirrored = len / radix;
    let mut reversed = 0;

    while place < len {
        reversed += mirrored * ((index / place) % radix);
        place = match place.checked_mul(radix) {
            Some(place) => place,
            None => break,
        };
        mirrored /= radix;
    }

    reversed
}

/// Applies the digit-reversal permutation in place.
///
/// Called once after [`transform`](super::transform) to bring the output into natural order.
/// The permutation is its own inverse, so applying it twice restores the original order.
///
/// # Errors
/// Same as [`transform`](super::transform): the length must be a power of `radix`.
pub fn reorder<T>(data: &mut [T], radix: usize) -> Result<(), FftError> {
    stage_count(data.len(), radix)?;

    let len = data.len();
    // The first and last index map onto themselves.
    for idx_src in 1..len.saturating_sub(1) {
        let idx_dst = digit_reverse(idx_src, len, radix);
        if idx_dst > idx_src {
            data.swap(idx_src, idx_dst);
        }
    }

    Ok(())
}

/// Collects the swaps [`reorder`] performs, for replay by a plan.
pub(crate) fn swap_pairs(len: usize, radix: usize) -> Vec<(usize, usize)> {
    (1..len.saturating_sub(1))
        .filter_map(|idx_src| {
            let idx_dst = digit_reverse(idx_src, len, radix);
            (idx_dst > idx_src).then_some((idx_src, idx_dst))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use super::*;

    #[test]
    fn test_bit_reversal() {
        let reversed: Vec<usize> = (0..8).map(|i| digit_reverse(i, 8, 2)).collect();
        assert_eq!(reversed, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_base_4_reversal() {
        // 16 = 4², index (d1 d0) maps to (d0 d1).
        assert_eq!(digit_reverse(1, 16, 4), 4);
        assert_eq!(digit_reverse(4, 16, 4), 1);
        assert_eq!(digit_reverse(6, 16, 4), 9);
        assert_eq!(digit_reverse(15, 16, 4), 15);
    }

    #[test]
    fn test_base_3_reversal() {
        // 27 = 3³: 5 = (0 1 2)₃ maps to (2 1 0)₃ = 21.
        assert_eq!(digit_reverse(5, 27, 3), 21);
        assert_eq!(digit_reverse(21, 27, 3), 5);
    }

    #[test]
    fn test_reorder_radix_2() {
        let mut data: Vec<usize> = (0..8).collect();
        reorder(&mut data, 2).unwrap();
        assert_eq!(data, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn test_reorder_is_involution() {
        for (len, radix) in [(1, 2), (2, 2), (64, 2), (64, 4), (64, 8), (81, 3), (256, 16)] {
            let original: Vec<usize> = (0..len).collect();
            let mut data = original.clone();

            reorder(&mut data, radix).unwrap();
            if len > radix {
                assert_ne!(data, original, "len {len}, radix {radix}");
            }
            for (i, &value) in data.iter().enumerate() {
                assert_eq!(value, digit_reverse(i, len, radix));
            }

            reorder(&mut data, radix).unwrap();
            assert_eq!(data, original, "len {len}, radix {radix}");
        }
    }

    #[test]
    fn test_single_stage_is_identity() {
        let mut data: Vec<usize> = (0..5).collect();
        reorder(&mut data, 5).unwrap();
        assert_eq!(data, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reorder_rejects_invalid_size() {
        let mut data = vec![0u8; 10];
        assert_eq!(
            reorder(&mut data, 3),
            Err(FftError::InvalidSize { len: 10, radix: 3 })
        );
    }

    #[test]
    fn test_reorder_rejects_degenerate_radix() {
        for radix in [0, 1] {
            for len in [1, 8] {
                let mut data: Vec<usize> = (0..len).collect();
                assert_eq!(
                    reorder(&mut data, radix),
                    Err(FftError::InvalidRadix { radix })
                );
                assert_eq!(data, (0..len).collect::<Vec<usize>>());
            }
        }
    }

    #[test]
    fn test_swap_pairs_replays_reorder() {
        let mut expected: Vec<usize> = (0..512).collect();
        reorder(&mut expected, 8).unwrap();

        let mut replayed: Vec<usize> = (0..512).collect();
        for (a, b) in swap_pairs(512, 8) {
            replayed.swap(a, b);
        }
        assert_eq!(replayed, expected);
    }
}
