//======================================================================
// src/backends/fused.rs
// Keccak-f[1600] with Rho and Pi merged into one walk of the lane cycle.
//======================================================================

use crate::consts::{PI_LANES, RHO_PI_ROTATIONS, ROUNDS, ROW_LANES, STATE_LANES};
use crate::rc::constant_for;
use crate::state::rotate_left;
use crate::variant::PermutationVariant;

/// The state permutation using the fused Rho/Pi walk.
#[inline(always)]
pub(crate) fn permutation<V: PermutationVariant>(a: &mut [u64; STATE_LANES]) {
    assert!(V::ROUNDS <= ROUNDS, "at most {ROUNDS} rounds are defined");
    for round in ROUNDS - V::ROUNDS..ROUNDS {
        // Theta
        let mut bc = [0u64; ROW_LANES];
        for x in 0..ROW_LANES {
            bc[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..ROW_LANES {
            let d = bc[(x + 4) % ROW_LANES] ^ rotate_left(bc[(x + 1) % ROW_LANES], 1);
            for y in (0..STATE_LANES).step_by(ROW_LANES) {
                a[y + x] ^= d;
            }
        }

        // Rho and Pi
        let mut carry = a[1];
        for (&to, &offset) in PI_LANES.iter().zip(RHO_PI_ROTATIONS.iter()) {
            let next = a[to];
            a[to] = rotate_left(carry, offset);
            carry = next;
        }

        // Chi
        for y in (0..STATE_LANES).step_by(ROW_LANES) {
            let mut row = [0u64; ROW_LANES];
            row.copy_from_slice(&a[y..y + ROW_LANES]);
            for x in 0..ROW_LANES {
                a[y + x] = row[x] ^ (!row[(x + 1) % ROW_LANES] & row[(x + 2) % ROW_LANES]);
            }
        }

        // Iota
        a[0] ^= constant_for(round);
    }
}
