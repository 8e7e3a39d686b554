use nfcgate::Error;
use nfcgate::protocol::{Frame, dcs, lcs};

#[test]
fn frame_encode_decode_roundtrip() {
    let payload = [0xd5, 0x4b, 0x00];
    let raw = Frame::encode(&payload).unwrap();
    assert_eq!(raw[..5], [0x00, 0x00, 0xff, 0x03, lcs(3)]);
    assert_eq!(raw[raw.len() - 2], dcs(&payload));
    assert_eq!(Frame::decode(&raw).unwrap(), Frame::Information(payload.to_vec()));
    assert_eq!(Frame::wire_len(&raw), Some(raw.len()));
}

#[test]
fn fixed_frames_are_recognised() {
    assert_eq!(
        Frame::decode(&hex::decode("0000ff00ff00").unwrap()).unwrap(),
        Frame::Ack
    );
    assert_eq!(
        Frame::decode(&hex::decode("0000ffff0000").unwrap()).unwrap(),
        Frame::Nack
    );
    let error = Frame::ApplicationError.to_bytes().unwrap();
    assert_eq!(error, hex::decode("0000ff01ff7f8100").unwrap());
    assert!(matches!(
        Frame::decode_information(&error),
        Err(Error::ApplicationError)
    ));
}

#[test]
fn leading_noise_is_skipped() {
    let mut raw = vec![0x00, 0x00];
    raw.extend(Frame::encode(&[0xd5, 0x15]).unwrap());
    assert_eq!(Frame::decode_information(&raw).unwrap(), vec![0xd5, 0x15]);
}

#[test]
fn corrupted_frames_are_rejected() {
    let good = Frame::encode(&[0xd5, 0x03, 0x32, 0x01, 0x06, 0x07]).unwrap();

    let mut bad_lcs = good.clone();
    bad_lcs[4] ^= 0xff;
    assert!(matches!(Frame::decode(&bad_lcs), Err(Error::ChecksumMismatch { .. })));

    let mut bad_dcs = good.clone();
    let at = bad_dcs.len() - 2;
    bad_dcs[at] = bad_dcs[at].wrapping_add(1);
    assert!(matches!(Frame::decode(&bad_dcs), Err(Error::ChecksumMismatch { .. })));

    assert!(Frame::decode(&good[..good.len() - 3]).is_err());
    assert!(Frame::decode(&hex::decode("0000ffffff0100").unwrap()).is_err());
}
