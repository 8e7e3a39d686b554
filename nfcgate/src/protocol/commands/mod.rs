// nfcgate/src/protocol/commands/mod.rs

pub mod polling;
pub mod system;

pub use polling::{auto_poll_type, brty, encode_in_auto_poll, encode_in_list_passive_target};
pub use system::{
    encode_get_firmware_version, encode_max_retries, encode_rf_field, encode_sam_configuration,
};

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_IN_AUTO_POLL, CMD_IN_LIST_PASSIVE_TARGET, CMD_RF_CONFIGURATION,
    CMD_SAM_CONFIGURATION,
};
use crate::Result;
use crate::types::Modulation;

/// Host-to-chip commands used by the initiator. Per-command encoders live in
/// `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    /// SAM in normal mode (PN532 only)
    SamConfiguration,
    /// RFConfiguration item 0x01: switch the RF field
    RfField { on: bool },
    /// RFConfiguration item 0x05: retry counts for ATR, PSL and passive activation
    MaxRetries {
        atr_res: u8,
        psl_res: u8,
        passive_activation: u8,
    },
    InListPassiveTarget {
        max_targets: u8,
        modulation: Modulation,
    },
    InAutoPoll {
        poll_nr: u8,
        period: u8,
        modulations: Vec<Modulation>,
    },
}

impl Command {
    /// PN53x command code (the byte following the D4 frame identifier).
    pub fn code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration => CMD_SAM_CONFIGURATION,
            Self::RfField { .. } | Self::MaxRetries { .. } => CMD_RF_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InAutoPoll { .. } => CMD_IN_AUTO_POLL,
        }
    }

    /// Encode the command into a frame payload (TFI + code + parameters).
    ///
    /// Fails with `UnsupportedModulation` when a polling command names a
    /// modulation the chip cannot activate.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::GetFirmwareVersion => Ok(encode_get_firmware_version()),
            Self::SamConfiguration => Ok(encode_sam_configuration()),
            Self::RfField { on } => Ok(encode_rf_field(*on)),
            Self::MaxRetries {
                atr_res,
                psl_res,
                passive_activation,
            } => Ok(encode_max_retries(*atr_res, *psl_res, *passive_activation)),
            Self::InListPassiveTarget {
                max_targets,
                modulation,
            } => encode_in_list_passive_target(*max_targets, *modulation),
            Self::InAutoPoll {
                poll_nr,
                period,
                modulations,
            } => encode_in_auto_poll(*poll_nr, *period, modulations),
        }
    }
}
