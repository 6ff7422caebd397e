//! Pool arithmetic helpers.
//!
//! - [`floor_sqrt`] — Newton integer square root, used for first-deposit
//!   share issuance and protocol fee accrual.
//! - [`uq64x64`] — fixed-point price encoding for the cumulative price
//!   accumulators.

mod sqrt;
pub mod uq64x64;

pub use sqrt::floor_sqrt;
pub use uq64x64::Uq64x64;
