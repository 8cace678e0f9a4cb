//======================================================================
// src/rc.rs
// Round constant lookup for the Iota step.
//======================================================================

use crate::consts::ROUNDS;
use cfg_if::cfg_if;

/// Expands one packed round-constant byte into its 64-bit constant.
///
/// Bit `j` (0..=6) of `packed` sets bit `2^j - 1` of the result. Bit 7 is
/// ignored.
#[inline(always)]
pub const fn decode(packed: u8) -> u64 {
    let mut out = 0u64;
    let mut j = 0u32;
    while j < 7 {
        if (packed >> j) & 1 == 1 {
            out |= 1u64 << ((1u32 << j) - 1);
        }
        j += 1;
    }
    out
}

cfg_if! {
    if #[cfg(feature = "kf1600_table")] {
        #[inline(always)]
        fn lookup(round: usize) -> u64 {
            crate::consts::RC[round]
        }
    } else {
        #[inline(always)]
        fn lookup(round: usize) -> u64 {
            decode(crate::consts::PACKED_RC[round])
        }
    }
}

/// Returns the Iota constant for `round`.
///
/// # Panics
///
/// If `round` is not in `0..24`.
#[inline]
pub fn constant_for(round: usize) -> u64 {
    assert!(round < ROUNDS, "round index {round} out of range 0..{ROUNDS}");
    lookup(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PACKED_RC, RC};

    #[test]
    fn decode_maps_each_bit() {
        let positions: [u32; 7] = [0, 1, 3, 7, 15, 31, 63];
        for (j, pos) in positions.iter().enumerate() {
            assert_eq!(decode(1 << j), 1u64 << pos, "packed bit {j}");
        }
        assert_eq!(decode(0x7f), positions.iter().fold(0u64, |acc, p| acc | (1u64 << p)));
        assert_eq!(decode(0x80), 0);
    }

    #[test]
    fn packed_table_expands_to_canonical_constants() {
        for (round, (&packed, &expected)) in PACKED_RC.iter().zip(RC.iter()).enumerate() {
            assert_eq!(decode(packed), expected, "round {round}");
        }
    }

    #[test]
    fn canonical_constants_only_use_sparse_bits() {
        let mask = decode(0x7f);
        for c in RC {
            assert_eq!(c & !mask, 0);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn round_past_the_end_panics() {
        constant_for(ROUNDS);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn wrapped_negative_round_panics() {
        constant_for(usize::MAX);
    }
}
