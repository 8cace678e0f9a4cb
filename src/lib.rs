#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point. Declares the public API and wires up the modules.
//======================================================================

// --- Module declarations ---
pub mod consts;
pub mod variant;
mod backends;
mod error;
mod extract;
mod rc;
mod state;


// --- Re-exports ---
pub use crate::error::StateError;
pub use crate::extract::{extract256, Digest256};
pub use crate::rc::{constant_for, decode};
pub use crate::state::{rotate_left, State};
pub use crate::variant::{KeccakF1600, KeccakP1600_12, PermutationVariant};
pub use zeroize;

/// Applies the 24-round Keccak-f[1600] permutation to `state` in place.
#[inline]
pub fn permute(state: &mut State) {
    permute_with::<KeccakF1600>(state);
}

/// Applies the last `V::ROUNDS` rounds of Keccak-f[1600] to `state` in place.
///
/// # Panics
///
/// If `V::ROUNDS` is greater than 24.
#[inline]
pub fn permute_with<V: PermutationVariant>(state: &mut State) {
    backends::permutation::<V>(state.lanes_mut());
}
