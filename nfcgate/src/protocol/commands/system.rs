// nfcgate/src/protocol/commands/system.rs

use crate::constants::{
    CMD_GET_FIRMWARE_VERSION, CMD_RF_CONFIGURATION, CMD_SAM_CONFIGURATION, PN53X_TFI_HOST,
};

const RF_ITEM_FIELD: u8 = 0x01;
const RF_ITEM_MAX_RETRIES: u8 = 0x05;

/// SAM mode "normal": the SAM is not used
const SAM_MODE_NORMAL: u8 = 0x01;

pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN53X_TFI_HOST, CMD_GET_FIRMWARE_VERSION]
}

/// Normal mode, no virtual-card timeout. The PN532 refuses any RF command
/// until this has been sent once after power-up.
pub fn encode_sam_configuration() -> Vec<u8> {
    vec![PN53X_TFI_HOST, CMD_SAM_CONFIGURATION, SAM_MODE_NORMAL, 0x00]
}

pub fn encode_rf_field(on: bool) -> Vec<u8> {
    vec![
        PN53X_TFI_HOST,
        CMD_RF_CONFIGURATION,
        RF_ITEM_FIELD,
        u8::from(on),
    ]
}

/// `0xFF` in any slot means "retry forever".
pub fn encode_max_retries(atr_res: u8, psl_res: u8, passive_activation: u8) -> Vec<u8> {
    vec![
        PN53X_TFI_HOST,
        CMD_RF_CONFIGURATION,
        RF_ITEM_MAX_RETRIES,
        atr_res,
        psl_res,
        passive_activation,
    ]
}
