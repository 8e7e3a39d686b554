// Shared helpers for the integration tests. Each aggregator pulls this in
// with `#[path]`, so not every helper is used by every test crate.
#![allow(dead_code)]

use nfcgate::protocol::Frame;
use nfcgate::test_support::{ack_frame, seed_exchange, seed_silent_exchange};
use nfcgate::transport::MockProbe;

/// InListPassiveTarget answer with no target
pub const IN_LIST_EMPTY: [u8; 3] = [0xd5, 0x4b, 0x00];

/// InAutoPoll answer with no target
pub const AUTO_POLL_EMPTY: [u8; 3] = [0xd5, 0x61, 0x00];

/// Queue `n` empty InListPassiveTarget answers
pub fn seed_in_list_empty(probe: &MockProbe, n: usize) {
    for _ in 0..n {
        seed_exchange(probe, &IN_LIST_EMPTY);
    }
}

/// Queue `n` InListPassiveTarget commands that time out
pub fn seed_in_list_silent(probe: &MockProbe, n: usize) {
    for _ in 0..n {
        seed_silent_exchange(probe);
    }
}

/// Queue an ACK followed by the chip's application error frame
pub fn seed_application_error(probe: &MockProbe) {
    probe.push_response(ack_frame());
    probe.push_response(Frame::ApplicationError.to_bytes().expect("error frame"));
}

/// Host frames sent after the device was readied, decoded to their payloads.
/// ACK frames (aborts) come back as an empty payload.
pub fn sent_payloads(probe: &MockProbe) -> Vec<Vec<u8>> {
    probe
        .sent()
        .iter()
        .map(|raw| match Frame::decode(raw).expect("host frame") {
            Frame::Information(payload) => payload,
            _ => Vec::new(),
        })
        .collect()
}
