// nfcgate/src/protocol/responses/mod.rs

pub mod polling;
pub mod system;

pub use polling::{AutoPollTarget, PassiveTarget, decode_in_auto_poll, decode_in_list_passive_target};
pub use system::{FirmwareVersion, decode_firmware_version};

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_AUTO_POLL, CMD_IN_LIST_PASSIVE_TARGET, CMD_RF_CONFIGURATION,
    CMD_SAM_CONFIGURATION,
};
use crate::protocol::parser::expect_response_code;

/// Chip-to-host responses. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration,
    RfConfiguration,
    InListPassiveTarget {
        count: u8,
        first: Option<PassiveTarget>,
    },
    InAutoPoll { targets: Vec<AutoPollTarget> },
}

impl Response {
    /// Decode a response payload (`D5`, response code, data) for the given
    /// command code. The response code must equal the command code + 1.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        let body = expect_response_code(data, expected_cmd.wrapping_add(1))?;

        match expected_cmd {
            CMD_GET_FIRMWARE_VERSION => Ok(Self::FirmwareVersion(decode_firmware_version(body)?)),
            CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            CMD_RF_CONFIGURATION => Ok(Self::RfConfiguration),
            CMD_IN_LIST_PASSIVE_TARGET => {
                let (count, first) = decode_in_list_passive_target(body)?;
                Ok(Self::InListPassiveTarget { count, first })
            }
            CMD_IN_AUTO_POLL => Ok(Self::InAutoPoll {
                targets: decode_in_auto_poll(body)?,
            }),
            _ => Err(crate::Error::UnsupportedOperation(format!(
                "no decoder for command {expected_cmd:#04x}"
            ))),
        }
    }
}
