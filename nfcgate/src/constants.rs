// nfcgate/src/constants.rs
//! Common protocol constants used across the crate

/// PN53x frame preamble + start code: 0x00 0x00 0xFF
pub const PN53X_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN53x frame postamble: 0x00
pub const PN53X_POSTAMBLE: u8 = 0x00;

/// Minimal normal information frame length in bytes
/// (preamble 3 + len + lcs + dcs + postamble)
pub const PN53X_MIN_FRAME_LEN: usize = 7;

/// Maximum payload (TFI + data) of a normal information frame
pub const PN53X_MAX_PAYLOAD_LEN: usize = 255;

/// ACK frame sent by the chip after each accepted command, and by the host
/// to abort a pending command.
pub const PN53X_ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame: asks the other side to resend its last frame.
pub const PN53X_NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Payload of the application-level error frame (syntax error in the command)
pub const PN53X_APPLICATION_ERROR: u8 = 0x7F;

/// Host->chip frame identifier (TFI) and chip->host identifier
pub const PN53X_TFI_HOST: u8 = 0xD4;
pub const PN53X_TFI_CHIP: u8 = 0xD5;

/// Command codes
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const CMD_IN_AUTO_POLL: u8 = 0x60;

/// IC identifiers reported by GetFirmwareVersion
pub const IC_PN532: u8 = 0x32;
pub const IC_PN533: u8 = 0x33;

/// One InAutoPoll / passive polling period unit, in milliseconds
pub const POLL_PERIOD_UNIT_MS: u64 = 150;

/// Extra host-side time granted to InAutoPoll on top of the chip's own budget
pub const AUTO_POLL_SLACK_MS: u64 = 1000;

/// How long the host waits for the ACK frame after sending a command
pub const ACK_TIMEOUT_MS: u64 = 200;

/// FeliCa polling request carried by InListPassiveTarget:
/// command 0x00, system code 0xFFFF, request code 0x01 (system code), time slot 0
pub const FELICA_POLLING_PAYLOAD: [u8; 5] = [0x00, 0xFF, 0xFF, 0x01, 0x00];

/// ISO/IEC 14443-A NFCID1 maximum length (triple size UID)
pub const ISO14443A_MAX_UID_LEN: usize = 10;

/// Default announcement endpoint for the door status notifier
pub const DEFAULT_ANNOUNCE_ENDPOINT: &str = "213.92.8.4:6667";
