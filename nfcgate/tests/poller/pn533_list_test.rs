#[path = "../common/mod.rs"]
mod common;

use nfcgate::prelude::*;
use nfcgate::test_support::{
    in_list_found_payload, mock_context, sample_target_data, seed_exchange, seed_ready_device,
};
use nfcgate::transport::MockProbe;

fn ready(probe: &MockProbe) -> Context {
    seed_ready_device(probe, Chip::Pn533);
    mock_context(probe)
}

#[test]
fn every_default_modulation_is_found() {
    for (i, &modulation) in ProbeTable::default().modulations().iter().enumerate() {
        let probe = MockProbe::new();
        let ctx = ready(&probe);
        common::seed_in_list_empty(&probe, i);
        seed_exchange(&probe, &in_list_found_payload(&sample_target_data(modulation)));

        let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
        match poll_once(&mut device, &ProbeTable::default(), PollSettings::default()) {
            PollOutcome::Found(target) => assert_eq!(target.modulation(), modulation),
            other => panic!("{modulation}: expected a target, got {other:?}"),
        }
        assert_eq!(probe.pending_responses(), 0, "{modulation}");
    }
}

#[test]
fn probes_stop_at_first_responder() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    common::seed_in_list_empty(&probe, 1);
    seed_exchange(
        &probe,
        &in_list_found_payload(&sample_target_data(Modulation::ISO14443B_106)),
    );

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let before = probe.sent().len();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::Found(Target::Iso14443b(_))));

    let polls: Vec<_> = common::sent_payloads(&probe)[before..].to_vec();
    assert_eq!(polls.len(), 2);
    assert_eq!(polls[0][..4], [0xd4, 0x4a, 0x01, 0x00]);
    assert_eq!(polls[1][..4], [0xd4, 0x4a, 0x01, 0x03]);
}

#[test]
fn empty_field_is_not_found() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    common::seed_in_list_empty(&probe, 5);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::NotFound));
}

#[test]
fn timeouts_are_not_found_and_aborted() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    common::seed_in_list_silent(&probe, 5);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let before = probe.sent().len();
    let outcome = poll_once(&mut device, &ProbeTable::default(), PollSettings::default());
    assert!(matches!(outcome, PollOutcome::NotFound));

    // one command plus one abort per modulation
    let aborts = probe.sent()[before..]
        .iter()
        .filter(|raw| raw.as_slice() == nfcgate::constants::PN53X_ACK_FRAME)
        .count();
    assert_eq!(aborts, 5);
}

#[test]
fn repeated_rounds_follow_poll_nr() {
    let probe = MockProbe::new();
    let ctx = ready(&probe);
    let table: ProbeTable = "felica:212".parse().unwrap();
    common::seed_in_list_empty(&probe, 3);

    let mut device = ctx.open(None).unwrap().initiator_init().unwrap();
    let outcome = poll_once(&mut device, &table, PollSettings::new(3, 1).unwrap());
    assert!(matches!(outcome, PollOutcome::NotFound));
    assert_eq!(probe.pending_responses(), 0);
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
