// nfcgate/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use codec::{decode_response_frame, encode_command_frame};
pub use commands::Command;
pub use frame::Frame;
pub use responses::*;
