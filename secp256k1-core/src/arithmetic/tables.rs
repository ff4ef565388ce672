//! Generator multiplication, backed by a lazily built wNAF table when the
//! `precomputed-tables` feature is enabled.

use super::{ProjectivePoint, Scalar};
use crate::Result;

#[cfg(all(
    feature = "precomputed-tables",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

cfg_if::cfg_if! {
    if #[cfg(feature = "precomputed-tables")] {
        use super::{WnafTable, mul::MAX_WINDOW_SIZE};
        use crate::Error;

        #[cfg(feature = "critical-section")]
        use once_cell::sync::Lazy as LazyLock;
        #[cfg(all(feature = "std", not(feature = "critical-section")))]
        use std::sync::LazyLock;

        /// Window size used for the generator's table.
        pub(crate) const GENERATOR_WINDOW: usize = MAX_WINDOW_SIZE;

        /// Generator table, built on first use and shared by all threads.
        static GENERATOR_TABLE: LazyLock<core::result::Result<WnafTable, Error>> =
            LazyLock::new(|| WnafTable::new(&ProjectivePoint::GENERATOR, GENERATOR_WINDOW));

        /// Returns `[k] G`.
        pub(crate) fn mul_base(k: &Scalar) -> Result<ProjectivePoint> {
            GENERATOR_TABLE.as_ref().map_err(|e| *e)?.mul(k)
        }
    } else {
        use super::{WnafTable, mul::VARIABLE_BASE_WINDOW};

        /// Returns `[k] G`.
        pub(crate) fn mul_base(k: &Scalar) -> Result<ProjectivePoint> {
            WnafTable::new(&ProjectivePoint::GENERATOR, VARIABLE_BASE_WINDOW)?.mul(k)
        }
    }
}
