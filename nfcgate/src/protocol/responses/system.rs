// nfcgate/src/protocol/responses/system.rs

use crate::Result;
use crate::protocol::parser::{ensure_len, slice_at};

/// GetFirmwareVersion answer: IC, Ver, Rev, Support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

pub fn decode_firmware_version(body: &[u8]) -> Result<FirmwareVersion> {
    ensure_len(body, 4)?;
    let s = slice_at(body, 0, 4)?;
    Ok(FirmwareVersion {
        ic: s[0],
        version: s[1],
        revision: s[2],
        support: s[3],
    })
}
