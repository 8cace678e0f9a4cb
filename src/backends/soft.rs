//======================================================================
// src/backends/soft.rs
// Step-by-step software implementation of Keccak-f[1600].
//======================================================================

use crate::consts::{PI_CYCLE, RHO_OFFSETS, ROUNDS, ROW_LANES, STATE_LANES};
use crate::rc::constant_for;
use crate::state::rotate_left;
use crate::variant::PermutationVariant;

/// Column parity mixing.
#[inline(always)]
pub(crate) fn theta(a: &mut [u64; STATE_LANES]) {
    let mut c = [0u64; ROW_LANES];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    let mut d = [0u64; ROW_LANES];
    for (x, mix) in d.iter_mut().enumerate() {
        *mix = rotate_left(c[(x + 1) % ROW_LANES], 1) ^ c[(x + 4) % ROW_LANES];
    }

    for row in a.chunks_exact_mut(ROW_LANES) {
        for (lane, mix) in row.iter_mut().zip(d) {
            *lane ^= mix;
        }
    }
}

/// Per-lane rotations. Lane 0 has offset 0 and is left as is.
#[inline(always)]
pub(crate) fn rho(a: &mut [u64; STATE_LANES]) {
    for (lane, &offset) in a.iter_mut().zip(RHO_OFFSETS.iter()).skip(1) {
        *lane = rotate_left(*lane, offset);
    }
}

/// Moves lane `(x, y)` to `(y, 2x + 3y mod 5)` by walking the single cycle.
#[inline(always)]
pub(crate) fn pi(a: &mut [u64; STATE_LANES]) {
    let saved = a[PI_CYCLE[0]];
    for step in PI_CYCLE.windows(2) {
        a[step[0]] = a[step[1]];
    }
    a[PI_CYCLE[PI_CYCLE.len() - 1]] = saved;
}

/// The non-linear row step `a[x] ^= !a[x+1] & a[x+2]`.
#[inline(always)]
pub(crate) fn chi(a: &mut [u64; STATE_LANES]) {
    for row in a.chunks_exact_mut(ROW_LANES) {
        // Lanes 0 and 1 are overwritten before lanes 3 and 4 read them.
        let (r0, r1) = (row[0], row[1]);
        row[0] ^= !row[1] & row[2];
        row[1] ^= !row[2] & row[3];
        row[2] ^= !row[3] & row[4];
        row[3] ^= !row[4] & r0;
        row[4] ^= !r0 & r1;
    }
}

#[inline(always)]
pub(crate) fn iota(a: &mut [u64; STATE_LANES], round: usize) {
    a[0] ^= constant_for(round);
}

/// The state permutation: the last `V::ROUNDS` rounds of Keccak-f[1600].
#[inline(always)]
pub(crate) fn permutation<V: PermutationVariant>(a: &mut [u64; STATE_LANES]) {
    assert!(V::ROUNDS <= ROUNDS, "at most {ROUNDS} rounds are defined");
    for round in ROUNDS - V::ROUNDS..ROUNDS {
        theta(a);
        rho(a);
        pi(a);
        chi(a);
        iota(a, round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::{RngCore, SeedableRng};

    fn random_lanes(rng: &mut ChaCha8Rng) -> [u64; STATE_LANES] {
        let mut lanes = [0u64; STATE_LANES];
        for lane in lanes.iter_mut() {
            *lane = rng.next_u64();
        }
        lanes
    }

    #[test]
    fn theta_matches_column_parity_formula() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        for _ in 0..16 {
            let before = random_lanes(&mut rng);
            let mut after = before;
            theta(&mut after);

            for x in 0..5 {
                let parity = |col: usize| (0..5).fold(0u64, |acc, y| acc ^ before[col + 5 * y]);
                let d = parity((x + 4) % 5) ^ parity((x + 1) % 5).rotate_left(1);
                for y in 0..5 {
                    assert_eq!(after[x + 5 * y], before[x + 5 * y] ^ d, "lane ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn theta_spreads_a_single_bit() {
        let mut a = [0u64; STATE_LANES];
        a[0] = 1;
        theta(&mut a);
        // Column 0 parity feeds D[1] directly and D[4] rotated by one.
        for y in 0..5 {
            assert_eq!(a[5 * y], if y == 0 { 1 } else { 0 });
            assert_eq!(a[1 + 5 * y], 1);
            assert_eq!(a[2 + 5 * y], 0);
            assert_eq!(a[3 + 5 * y], 0);
            assert_eq!(a[4 + 5 * y], 2);
        }
    }

    #[test]
    fn rho_rotates_by_lane_offset() {
        let mut a = [1u64; STATE_LANES];
        rho(&mut a);
        assert_eq!(a[0], 1);
        for (i, lane) in a.iter().enumerate() {
            assert_eq!(*lane, 1u64 << RHO_OFFSETS[i], "lane {i}");
        }
        assert_eq!(a[1], 1 << 1);
        assert_eq!(a[2], 1 << 62);
        assert_eq!(a[24], 1 << 14);
    }

    #[test]
    fn pi_follows_coordinate_mapping() {
        let mut a = [0u64; STATE_LANES];
        for (i, lane) in a.iter_mut().enumerate() {
            *lane = i as u64;
        }
        pi(&mut a);
        for x in 0..5 {
            for y in 0..5 {
                let to = y + 5 * ((2 * x + 3 * y) % 5);
                assert_eq!(a[to], (x + 5 * y) as u64, "({x}, {y}) -> {to}");
            }
        }
    }

    #[test]
    fn chi_reads_pre_update_row() {
        let mut rng = ChaCha8Rng::from_seed([9; 32]);
        for _ in 0..16 {
            let before = random_lanes(&mut rng);
            let mut after = before;
            chi(&mut after);
            for y in 0..5 {
                for x in 0..5 {
                    let at = |dx: usize| before[(x + dx) % 5 + 5 * y];
                    assert_eq!(after[x + 5 * y], at(0) ^ (!at(1) & at(2)));
                }
            }
        }
    }

    #[test]
    fn iota_touches_only_lane_zero() {
        let mut a = [0u64; STATE_LANES];
        iota(&mut a, 3);
        assert_eq!(a[0], 0x8000000080008000);
        assert!(a[1..].iter().all(|&lane| lane == 0));
    }
}
