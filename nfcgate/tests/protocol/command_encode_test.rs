use nfcgate::protocol::{Command, encode_command_frame};
use nfcgate::types::{BaudRate, Modulation, ModulationType};
use nfcgate::{Error, ProbeTable};

#[test]
fn configuration_commands() {
    assert_eq!(Command::SamConfiguration.encode().unwrap(), vec![0xd4, 0x14, 0x01, 0x00]);
    assert_eq!(
        Command::RfField { on: true }.encode().unwrap(),
        vec![0xd4, 0x32, 0x01, 0x01]
    );
    assert_eq!(
        Command::MaxRetries {
            atr_res: 0x00,
            psl_res: 0x01,
            passive_activation: 0x01,
        }
        .encode()
        .unwrap(),
        vec![0xd4, 0x32, 0x05, 0x00, 0x01, 0x01]
    );
}

#[test]
fn firmware_version_frame() {
    assert_eq!(
        encode_command_frame(&Command::GetFirmwareVersion).unwrap(),
        hex::decode("0000ff02fed4022a00").unwrap()
    );
}

#[test]
fn in_list_passive_target_per_modulation() {
    let expected: [&str; 5] = [
        "d44a0100",
        "d44a010300",
        "d44a010100ffff0100",
        "d44a010200ffff0100",
        "d44a0104",
    ];
    for (&modulation, want) in ProbeTable::default().modulations().iter().zip(expected) {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            modulation,
        };
        assert_eq!(hex::encode(cmd.encode().unwrap()), want, "{modulation}");
    }
}

#[test]
fn unsupported_modulation_is_refused() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        modulation: Modulation::new(ModulationType::Iso14443a, BaudRate::Baud847),
    };
    assert!(matches!(cmd.encode(), Err(Error::UnsupportedModulation(_))));
}

#[test]
fn in_auto_poll_bounds() {
    let cmd = Command::InAutoPoll {
        poll_nr: 2,
        period: 3,
        modulations: vec![Modulation::FELICA_424, Modulation::ISO14443A_106],
    };
    assert_eq!(hex::encode(cmd.encode().unwrap()), "d46002031210");

    let empty = Command::InAutoPoll {
        poll_nr: 1,
        period: 1,
        modulations: Vec::new(),
    };
    assert!(empty.encode().is_err());
}
