//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize mock reader setup so tests across the crate and
//! the tests/ directory script the same chip conversations.
#![allow(dead_code)]

use crate::constants::PN53X_ACK_FRAME;
use crate::device::{Chip, Context};
use crate::protocol::Frame;
use crate::protocol::commands::auto_poll_type;
use crate::transport::{MockDriver, MockProbe};
use crate::types::{Modulation, ModulationType};

/// UID used by the canned ISO/IEC 14443-A target
pub const SAMPLE_UID: [u8; 7] = [0x04, 0x5a, 0x6b, 0x22, 0x91, 0x3c, 0x80];

#[doc(hidden)]
pub fn ack_frame() -> Vec<u8> {
    PN53X_ACK_FRAME.to_vec()
}

/// Wrap a chip answer payload (`D5 ...`) into a wire frame
#[doc(hidden)]
pub fn response_frame(payload: &[u8]) -> Vec<u8> {
    Frame::encode(payload).unwrap_or_default()
}

/// Queue the ACK and the answer of one command exchange
#[doc(hidden)]
pub fn seed_exchange(probe: &MockProbe, payload: &[u8]) {
    probe.push_response(ack_frame());
    probe.push_response(response_frame(payload));
}

/// Queue an ACK followed by no answer: the command times out
#[doc(hidden)]
pub fn seed_silent_exchange(probe: &MockProbe) {
    probe.push_response(ack_frame());
    probe.push_timeout();
}

#[doc(hidden)]
pub fn firmware_payload(chip: Chip) -> Vec<u8> {
    let ic = match chip {
        Chip::Pn532 => crate::constants::IC_PN532,
        Chip::Pn533 => crate::constants::IC_PN533,
        Chip::Other(ic) => ic,
    };
    vec![0xd5, 0x03, ic, 0x01, 0x06, 0x07]
}

/// Queue the GetFirmwareVersion exchange performed when a device is opened
#[doc(hidden)]
pub fn seed_firmware(probe: &MockProbe, chip: Chip) {
    seed_exchange(probe, &firmware_payload(chip));
}

/// Queue the configuration exchanges of `initiator_init`
#[doc(hidden)]
pub fn seed_initiator(probe: &MockProbe, chip: Chip) {
    if chip == Chip::Pn532 {
        seed_exchange(probe, &[0xd5, 0x15]);
    }
    seed_exchange(probe, &[0xd5, 0x33]);
    seed_exchange(probe, &[0xd5, 0x33]);
}

/// Queue everything up to a device ready to poll
#[doc(hidden)]
pub fn seed_ready_device(probe: &MockProbe, chip: Chip) {
    seed_firmware(probe, chip);
    seed_initiator(probe, chip);
}

/// Context whose only driver is a mock sharing `probe`
#[doc(hidden)]
pub fn mock_context(probe: &MockProbe) -> Context {
    Context::with_drivers(vec![Box::new(MockDriver::new(probe.clone()))])
}

#[doc(hidden)]
pub fn iso14443a_target_data(uid: &[u8]) -> Vec<u8> {
    let mut data = vec![0x00, 0x44, 0x00, uid.len() as u8];
    data.extend_from_slice(uid);
    data
}

/// Target data (after `Tg`) of a plausible card for each modulation
#[doc(hidden)]
pub fn sample_target_data(modulation: Modulation) -> Vec<u8> {
    match modulation.kind {
        ModulationType::Iso14443a => iso14443a_target_data(&SAMPLE_UID),
        ModulationType::Iso14443b => vec![
            0x50, 0x12, 0x34, 0x56, 0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0x81, 0x01, 0x00,
        ],
        ModulationType::Felica => {
            let mut data = vec![0x14, 0x01];
            data.extend_from_slice(&[0x01, 0x01, 0x0a, 0x10, 0x8e, 0x1b, 0x22, 0x33]);
            data.extend_from_slice(&[0x10, 0x0b, 0x4b, 0x42, 0x84, 0x85, 0xd0, 0xff]);
            data.extend_from_slice(&[0x88, 0xb4]);
            data
        }
        ModulationType::Jewel => vec![0x0c, 0x00, 0x9a, 0x1b, 0x2c, 0x3d],
    }
}

/// InListPassiveTarget answer carrying one target
#[doc(hidden)]
pub fn in_list_found_payload(target_data: &[u8]) -> Vec<u8> {
    let mut payload = vec![0xd5, 0x4b, 0x01, 0x01];
    payload.extend_from_slice(target_data);
    payload
}

/// InAutoPoll answer carrying one target of `modulation`
#[doc(hidden)]
pub fn auto_poll_found_payload(modulation: Modulation, target_data: &[u8]) -> Vec<u8> {
    let target_type = auto_poll_type(modulation).unwrap_or(0x00);
    let mut payload = vec![0xd5, 0x61, 0x01, target_type, target_data.len() as u8 + 1, 0x01];
    payload.extend_from_slice(target_data);
    payload
}
