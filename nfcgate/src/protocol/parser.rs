// nfcgate/src/protocol/parser.rs

use crate::constants::PN53X_TFI_CHIP;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

/// Check a chip response payload starts with `D5 <expected>` and return the
/// bytes after the response code.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<&[u8]> {
    let tfi = byte_at(data, 0)?;
    if tfi != PN53X_TFI_CHIP {
        return Err(Error::FrameFormat(format!(
            "unexpected frame identifier {tfi:#04x}"
        )));
    }
    let actual = byte_at(data, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(&data[2..])
}
