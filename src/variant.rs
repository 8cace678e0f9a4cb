//======================================================================
// src/variant.rs
// Round-count variants of the Keccak permutation.
//======================================================================

/// A trait that fixes the number of rounds a permutation call runs.
///
/// A variant with `ROUNDS = n` applies the last `n` rounds of Keccak-f[1600],
/// i.e. round indices `24 - n .. 24`, which is the Keccak-p[1600, n] family.
pub trait PermutationVariant: Sized + Clone + Send + Sync + 'static {
    /// Number of permutation rounds. Must not exceed 24.
    const ROUNDS: usize;
}

/// The full 24-round Keccak-f[1600] permutation.
#[derive(Clone, Debug)]
pub struct KeccakF1600;
impl PermutationVariant for KeccakF1600 {
    const ROUNDS: usize = 24;
}

/// Keccak-p[1600, 12], the reduced-round permutation behind KangarooTwelve
/// and TurboSHAKE.
#[derive(Clone, Debug)]
pub struct KeccakP1600_12;
impl PermutationVariant for KeccakP1600_12 {
    const ROUNDS: usize = 12;
}
