use nfcgate::protocol::{Frame, Response, decode_response_frame};
use nfcgate::target::Target;
use nfcgate::test_support::{
    SAMPLE_UID, auto_poll_found_payload, in_list_found_payload, response_frame,
    sample_target_data,
};
use nfcgate::types::Modulation;
use nfcgate::{Error, ProbeTable};

#[test]
fn firmware_version() {
    let raw = response_frame(&[0xd5, 0x03, 0x32, 0x01, 0x06, 0x07]);
    match decode_response_frame(0x02, &raw).unwrap() {
        Response::FirmwareVersion(fw) => {
            assert_eq!(fw.ic, 0x32);
            assert_eq!((fw.version, fw.revision, fw.support), (1, 6, 7));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn wrong_response_code_is_rejected() {
    let raw = response_frame(&[0xd5, 0x15]);
    assert!(matches!(
        decode_response_frame(0x4a, &raw),
        Err(Error::UnexpectedResponse { expected: 0x4b, actual: 0x15 })
    ));
}

#[test]
fn in_list_target_decodes_for_each_modulation() {
    for &modulation in ProbeTable::default().modulations() {
        let raw = response_frame(&in_list_found_payload(&sample_target_data(modulation)));
        let Response::InListPassiveTarget {
            count: 1,
            first: Some(first),
        } = decode_response_frame(0x4a, &raw).unwrap()
        else {
            panic!("{modulation}: expected one target");
        };
        let target = Target::decode(modulation, &first.data).unwrap();
        assert_eq!(target.modulation(), modulation);
    }
}

#[test]
fn auto_poll_target_maps_back_to_modulation() {
    for &modulation in ProbeTable::default().modulations() {
        let payload = auto_poll_found_payload(modulation, &sample_target_data(modulation));
        let Response::InAutoPoll { targets } = Response::decode(0x60, &payload).unwrap() else {
            panic!("{modulation}: expected InAutoPoll");
        };
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].modulation(), Some(modulation));
    }
}

#[test]
fn iso14443a_uid_survives_decoding() {
    let raw = response_frame(&in_list_found_payload(&sample_target_data(
        Modulation::ISO14443A_106,
    )));
    let payload = Frame::decode_information(&raw).unwrap();
    let Response::InListPassiveTarget { first: Some(first), .. } =
        Response::decode(0x4a, &payload).unwrap()
    else {
        panic!("expected a target");
    };
    match Target::decode(Modulation::ISO14443A_106, &first.data).unwrap() {
        Target::Iso14443a(a) => assert_eq!(a.uid.as_bytes(), SAMPLE_UID),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn truncated_uid_is_rejected() {
    // UID length byte claims 7, only 4 follow
    let data = [0x00, 0x44, 0x00, 0x07, 0x04, 0x5a, 0x6b, 0x22];
    assert!(Target::decode(Modulation::ISO14443A_106, &data).is_err());
}
