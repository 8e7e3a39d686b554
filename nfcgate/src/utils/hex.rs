//! Lowercase hex for card identifiers and frame dumps.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn push_byte(out: &mut String, byte: u8) {
    out.push(DIGITS[usize::from(byte >> 4)] as char);
    out.push(DIGITS[usize::from(byte & 0x0f)] as char);
}

/// Two digits per byte, no separators: the identifier line format.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    bytes.iter().for_each(|&b| push_byte(&mut out, b));
    out
}

/// Space separated, for `trace!` dumps of wire frames.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_byte(&mut out, b);
    }
    out
}
