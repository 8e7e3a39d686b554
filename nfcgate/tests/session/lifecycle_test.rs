#[path = "../common/mod.rs"]
mod common;

use nfcgate::prelude::*;
use nfcgate::session::{detect, exit_code};
use nfcgate::test_support::{
    in_list_found_payload, mock_context, sample_target_data, seed_exchange, seed_firmware,
    seed_ready_device,
};
use nfcgate::transport::{MockDriver, MockProbe};

#[test]
fn no_reader_is_fatal() {
    let probe = MockProbe::new();
    let ctx = Context::with_drivers(vec![Box::new(MockDriver::unavailable(probe.clone()))]);
    let mut out = Vec::new();

    let result = detect(&ctx, &ReaderConfig::default(), &mut out);
    assert!(matches!(result, Err(Error::DeviceUnavailable)));
    assert_eq!(exit_code(&result), 1);
    assert!(out.is_empty());
    assert!(probe.sent().is_empty());

    drop(ctx);
    assert!(probe.driver_released());
}

#[test]
fn silent_reader_is_fatal_and_released() {
    let probe = MockProbe::new();
    let ctx = mock_context(&probe);

    let result = detect(&ctx, &ReaderConfig::default(), &mut Vec::new());
    assert!(matches!(result, Err(Error::DeviceUnavailable)));
    assert_eq!(probe.open_count(), 1);
    assert!(probe.is_closed());
}

#[test]
fn initiator_failure_is_fatal_and_released() {
    let probe = MockProbe::new();
    seed_firmware(&probe, Chip::Pn533);
    common::seed_application_error(&probe);
    let ctx = mock_context(&probe);
    let mut out = Vec::new();

    let result = detect(&ctx, &ReaderConfig::default(), &mut out);
    assert!(matches!(result, Err(Error::InitiatorInitFailed(_))));
    assert_eq!(exit_code(&result), 1);
    assert!(out.is_empty());
    assert!(probe.is_closed());
}

#[test]
fn field_is_switched_off_on_release() {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn533);
    seed_exchange(
        &probe,
        &in_list_found_payload(&sample_target_data(Modulation::ISO14443A_106)),
    );
    let ctx = mock_context(&probe);

    detect(&ctx, &ReaderConfig::default(), &mut Vec::new()).unwrap();
    let sent = common::sent_payloads(&probe);
    assert_eq!(sent.last().unwrap()[..], [0xd4, 0x32, 0x01, 0x00]);
    assert!(probe.is_closed());
}

#[test]
fn session_exposes_device_until_dropped() {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn532);
    let ctx = mock_context(&probe);

    let session = ReaderSession::open(&ctx, None).unwrap();
    assert_eq!(session.device().chip(), Chip::Pn532);
    assert_eq!(session.device().connstring().driver(), "mock");
    assert!(!probe.is_closed());
    drop(session);
    assert!(probe.is_closed());
}
