//======================================================================
// src/extract.rs
// Reads a 256-bit digest out of a permuted state.
//======================================================================

use crate::consts::{DIGEST_BYTES, LANE_BYTES};
use crate::state::State;

/// A 256-bit digest as a big-endian byte string.
pub type Digest256 = [u8; DIGEST_BYTES];

/// Extracts the 256-bit digest held in lanes 0..4 of `state`.
///
/// Lanes are little-endian, the digest is read as one big-endian string, so
/// each lane is byte-reversed and lane 0 supplies the most significant eight
/// bytes.
pub fn extract256(state: &State) -> Digest256 {
    let mut out = [0u8; DIGEST_BYTES];
    for (chunk, lane) in out.chunks_exact_mut(LANE_BYTES).zip(state.lanes()) {
        chunk.copy_from_slice(&lane.swap_bytes().to_be_bytes());
    }
    out
}
