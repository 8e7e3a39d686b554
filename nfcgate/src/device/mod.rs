// nfcgate/src/device/mod.rs

pub mod context;
pub mod handle;
pub mod link;
pub mod models;

pub use crate::transport::{ConnString, Driver};
pub use context::Context;
pub use handle::{Device, Idle, Initiator};
pub use models::Chip;
