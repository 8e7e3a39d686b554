#[path = "../common/mod.rs"]
mod common;

use nfcgate::prelude::*;
use nfcgate::session::{detect, exit_code};
use nfcgate::test_support::{
    auto_poll_found_payload, in_list_found_payload, iso14443a_target_data, mock_context,
    sample_target_data, seed_exchange, seed_ready_device,
};
use nfcgate::transport::MockProbe;

fn run(probe: &MockProbe, config: &ReaderConfig) -> (nfcgate::Result<Detection>, String) {
    let ctx = mock_context(probe);
    let mut out = Vec::new();
    let result = detect(&ctx, config, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn prints_single_size_uid() -> anyhow::Result<()> {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn533);
    let uid = hex::decode("deadbeef")?;
    seed_exchange(&probe, &in_list_found_payload(&iso14443a_target_data(&uid)));

    let (result, out) = run(&probe, &ReaderConfig::default());
    assert_eq!(out, "deadbeef\n");
    assert_eq!(exit_code(&result), 0);
    Ok(())
}

#[test]
fn prints_triple_size_uid_through_auto_poll() -> anyhow::Result<()> {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn532);
    let uid = hex::decode("0102030405060708090a")?;
    seed_exchange(
        &probe,
        &auto_poll_found_payload(Modulation::ISO14443A_106, &iso14443a_target_data(&uid)),
    );

    let (result, out) = run(&probe, &ReaderConfig::default());
    assert!(matches!(result, Ok(Detection::Identified(ref u)) if u.len() == 10));
    assert_eq!(out, "0102030405060708090a\n");
    Ok(())
}

#[test]
fn other_families_print_nothing_and_succeed() {
    for modulation in [
        Modulation::ISO14443B_106,
        Modulation::FELICA_212,
        Modulation::FELICA_424,
        Modulation::JEWEL_106,
    ] {
        let probe = MockProbe::new();
        seed_ready_device(&probe, Chip::Pn532);
        seed_exchange(
            &probe,
            &auto_poll_found_payload(modulation, &sample_target_data(modulation)),
        );

        let (result, out) = run(&probe, &ReaderConfig::default());
        assert!(
            matches!(result, Ok(Detection::Undecodable(m)) if m == modulation),
            "{modulation}"
        );
        assert!(out.is_empty());
        assert_eq!(exit_code(&result), 0);
    }
}

#[test]
fn empty_field_prints_nothing_and_succeeds() {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn533);
    common::seed_in_list_empty(&probe, 5);

    let (result, out) = run(&probe, &ReaderConfig::default());
    assert!(matches!(result, Ok(Detection::NotFound)));
    assert!(out.is_empty());
    assert_eq!(exit_code(&result), 0);
}

#[test]
fn poll_fault_prints_nothing_and_succeeds() {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn533);
    common::seed_application_error(&probe);

    let (result, out) = run(&probe, &ReaderConfig::default());
    assert!(matches!(result, Ok(Detection::PollFailed(Error::ApplicationError))));
    assert!(out.is_empty());
    assert_eq!(exit_code(&result), 0);
}

#[test]
fn custom_probe_table_is_used() {
    let probe = MockProbe::new();
    seed_ready_device(&probe, Chip::Pn533);
    seed_exchange(
        &probe,
        &in_list_found_payload(&sample_target_data(Modulation::ISO14443A_106)),
    );
    let config = ReaderConfig {
        probe_table: "iso14443a:106".parse().unwrap(),
        ..ReaderConfig::default()
    };

    let (result, out) = run(&probe, &config);
    assert!(matches!(result, Ok(Detection::Identified(_))));
    assert_eq!(out, "045a6b22913c80\n");
}
