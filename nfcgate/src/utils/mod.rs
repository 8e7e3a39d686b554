//! Hex rendering and polling timeout arithmetic.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
