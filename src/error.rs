//======================================================================
// src/error.rs
// Errors surfaced when building a state from caller-supplied lanes.
//======================================================================

use core::fmt;

use crate::consts::STATE_LANES;

/// Error returned when a lane buffer cannot be turned into a [`State`](crate::State).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// The buffer did not hold exactly 25 lanes.
    InvalidLength {
        /// Number of lanes that were supplied.
        len: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "expected {STATE_LANES} lanes, got {len}")
            }
        }
    }
}

impl core::error::Error for StateError {}
