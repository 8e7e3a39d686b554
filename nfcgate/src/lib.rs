// nfcgate/src/lib.rs

//! nfcgate
//!
//! Single-shot contactless card detection for PN53x readers, and a TCP
//! door status notifier.
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod identify;
pub mod notifier;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod target;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// `crate::Error`, `crate::Result` and the newtypes in `types` are used
// throughout the crate and by consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
