//======================================================================
// src/backends/mod.rs
// Selects the permutation backend at compile time.
//======================================================================

use cfg_if::cfg_if;

#[cfg_attr(feature = "kf1600_fused", allow(dead_code))]
pub(crate) mod soft;

#[cfg(any(test, feature = "kf1600_fused"))]
pub(crate) mod fused;

cfg_if! {
    if #[cfg(feature = "kf1600_fused")] {
        pub(crate) use self::fused::permutation;
    } else {
        pub(crate) use self::soft::permutation;
    }
}
