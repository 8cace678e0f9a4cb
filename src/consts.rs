//======================================================================
// src/consts.rs
// Keccak-f[1600] state geometry, rotation offsets and round constants.
//======================================================================

/// Number of 64-bit lanes in the state.
pub const STATE_LANES: usize = 25;

/// Width of one row (and one column) of the 5×5 lane matrix.
pub const ROW_LANES: usize = 5;

/// Bytes per lane.
pub const LANE_BYTES: usize = 8;

/// The internal state size in bytes.
pub const STATE_BYTES: usize = STATE_LANES * LANE_BYTES;

/// Rounds of the full Keccak-f[1600] permutation.
pub const ROUNDS: usize = 24;

/// Length of the digest read by [`extract256`](crate::extract256).
pub const DIGEST_BYTES: usize = 32;

/// Rate of Keccak-256 in bytes (17 lanes). Absorbers XOR at most this much
/// input into the state between permutations.
pub const RATE_BYTES_256: usize = 136;

/// Round constants, one byte per round.
///
/// Bit `j` of each byte stands for bit `2^j - 1` of the 64-bit constant.
pub const PACKED_RC: [u8; ROUNDS] = [
    0x01, 0x1a, 0x5e, 0x70, 0x1f, 0x21, 0x79, 0x55, 0x0e, 0x0c, 0x35, 0x26,
    0x3f, 0x4f, 0x5d, 0x53, 0x52, 0x48, 0x16, 0x66, 0x79, 0x58, 0x21, 0x74,
];

/// Round constants (RC), fully expanded.
pub const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, indexed by linear lane position `x + 5y`.
pub const RHO_OFFSETS: [u32; STATE_LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

/// The single 24-lane cycle of the Pi step.
///
/// `PI_CYCLE[i]` receives the lane held at `PI_CYCLE[i + 1]`; the last
/// position receives the original value of `PI_CYCLE[0]`. Lane 0 is fixed.
pub const PI_CYCLE: [usize; STATE_LANES - 1] = [
    1, 6, 9, 22, 14, 20, 2, 12, 13, 19, 23, 15,
    4, 24, 21, 8, 16, 5, 3, 18, 17, 11, 7, 10,
];

/// Destination lanes of the fused Rho/Pi walk, starting from lane 1.
pub const PI_LANES: [usize; STATE_LANES - 1] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Rho offsets in the order the fused walk visits the source lanes.
pub const RHO_PI_ROTATIONS: [u32; STATE_LANES - 1] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];
