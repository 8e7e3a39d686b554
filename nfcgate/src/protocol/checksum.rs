// nfcgate/src/protocol/checksum.rs

/// Length checksum of a PN53x frame: LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over TFI and command data: sum(payload) + DCS == 0 (mod 256)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
