//======================================================================
// src/state.rs
// The 1600-bit permutation state and the lane rotation primitive.
//======================================================================

use core::ops::{Index, IndexMut};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{ROW_LANES, STATE_LANES};
use crate::error::StateError;
use crate::extract::Digest256;

/// Circular left rotation of a lane.
///
/// `n` is taken modulo 64, so `n = 0` and `n = 64` are both the identity.
#[inline(always)]
pub const fn rotate_left(value: u64, n: u32) -> u64 {
    value.rotate_left(n % 64)
}

/// The Keccak-f[1600] state: a 5×5 matrix of 64-bit lanes.
///
/// Lane `(x, y)` lives at linear index `x + 5 * y`. The state is wiped when
/// dropped.
#[derive(Clone, Default, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct State([u64; STATE_LANES]);

impl State {
    /// Creates an all-zero state.
    pub const fn new() -> Self {
        Self([0; STATE_LANES])
    }

    pub const fn from_lanes(lanes: [u64; STATE_LANES]) -> Self {
        Self(lanes)
    }

    #[inline]
    pub fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.0
    }

    #[inline]
    pub fn lanes_mut(&mut self) -> &mut [u64; STATE_LANES] {
        &mut self.0
    }

    /// Copies the lanes out; the state itself is still wiped on drop.
    pub fn into_lanes(self) -> [u64; STATE_LANES] {
        self.0
    }

    /// Lane at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..5`.
    #[inline]
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.0[Self::position(x, y)]
    }

    /// Mutable lane at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..5`.
    #[inline]
    pub fn lane_mut(&mut self, x: usize, y: usize) -> &mut u64 {
        &mut self.0[Self::position(x, y)]
    }

    /// Applies the full 24-round permutation in place.
    #[inline]
    pub fn permute(&mut self) {
        crate::permute(self);
    }

    /// Reads the 256-bit digest from lanes 0..4.
    #[inline]
    pub fn extract256(&self) -> Digest256 {
        crate::extract256(self)
    }

    #[inline(always)]
    fn position(x: usize, y: usize) -> usize {
        assert!(
            x < ROW_LANES && y < ROW_LANES,
            "lane coordinate ({x}, {y}) out of range"
        );
        x + ROW_LANES * y
    }
}

impl From<[u64; STATE_LANES]> for State {
    fn from(lanes: [u64; STATE_LANES]) -> Self {
        Self(lanes)
    }
}

impl TryFrom<&[u64]> for State {
    type Error = StateError;

    fn try_from(lanes: &[u64]) -> Result<Self, Self::Error> {
        let lanes: [u64; STATE_LANES] = lanes
            .try_into()
            .map_err(|_| StateError::InvalidLength { len: lanes.len() })?;
        Ok(Self(lanes))
    }
}

impl Index<usize> for State {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for State {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.0[index]
    }
}
