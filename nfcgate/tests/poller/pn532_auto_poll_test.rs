#[path = "../common/mod.rs"]
mod common;

use nfcgate::prelude::*;
use nfcgate::test_support::{
    SAMPLE_UID, auto_poll_found_payload, mock_context, sample_target_data, seed_exchange,
    seed_ready_device, seed_silent_exchange,
};
use nfcgate::transport::MockProbe;

fn ready(probe: &MockProbe) -> Context {
    seed_ready_device(probe, Chip::Pn532);
    mock_context(probe)
}

#[test]
fn every_default_modulation_is_found() {
    for &modulation in ProbeTable::default().modulations() {
        let probe = MockProbe::new();
        let ctx = ready(&probe);
        seed_exchange(
            &probe,
            &auto_poll_found_payload(modulation, &sample_target_data(modulation)),
        );

        let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
        assert_eq!(device.chip(), Chip::Pn532);
        match poll_once(&mut device, &ProbeTable::default(), PollSettings::default()) {
            PollOutcome::Found(target) => assert_eq!(target.modulation(), modulation),
            other => panic!("{modulation}: expected a target, got {other:?}"),
        }
    }
}

#[test]
fn auto_poll_carries_the_whole_table() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    seed_exchange(&probe, &common::AUTO_POLL_EMPTY);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let before = probe.sent().len();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::NotFound));

    let sent = common::sent_payloads(&probe);
    assert_eq!(
        sent[before],
        vec![0xd4, 0x60, 0x01, 0x01, 0x10, 0x23, 0x11, 0x12, 0x04]
    );
}

#[test]
fn timeout_is_not_found() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    seed_silent_exchange(&probe);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::NotFound));
}

#[test]
fn first_of_two_targets_wins() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);

    let mut payload = auto_poll_found_payload(
        Modulation::ISO14443A_106,
        &sample_target_data(Modulation::ISO14443A_106),
    );
    payload[2] = 0x02;
    let second = auto_poll_found_payload(
        Modulation::FELICA_212,
        &sample_target_data(Modulation::FELICA_212),
    );
    payload.extend_from_slice(&second[3..]);
    seed_exchange(&probe, &payload);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    match poll_once(&mut device, &ProbeTable::default(), PollSettings::default()) {
        PollOutcome::Found(target) => {
            assert_eq!(identify(&target).unwrap().as_bytes(), SAMPLE_UID);
        }
        other => panic!("expected the ISO/IEC 14443-A target, got {other:?}"),
    }
}

#[test]
fn application_error_is_reported() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    common::seed_application_error(&probe);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::Error(Error::ApplicationError)));
}
