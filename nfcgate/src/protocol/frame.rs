// nfcgate/src/protocol/frame.rs

use log::trace;

use crate::constants::{
    PN53X_ACK_FRAME, PN53X_APPLICATION_ERROR, PN53X_MAX_PAYLOAD_LEN, PN53X_MIN_FRAME_LEN,
    PN53X_NACK_FRAME, PN53X_POSTAMBLE, PN53X_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// A frame exchanged with a PN53x chip.
///
/// Wire format of an information frame:
/// `[00 00 FF] [LEN] [LCS] [TFI PD0..PDn] [DCS] [00]`
///
/// ACK (`00 00 FF 00 FF 00`) and NACK (`00 00 FF FF 00 00`) are fixed
/// six-byte frames. An information frame whose single payload byte is `0x7F`
/// is the chip's application-level error frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Ack,
    Nack,
    ApplicationError,
    /// TFI followed by the command or response data
    Information(Vec<u8>),
}

impl Frame {
    /// Encode a payload (TFI + data) into a normal information frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() || payload.len() > PN53X_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN53X_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(PN53X_MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&PN53X_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN53X_POSTAMBLE);
        Ok(out)
    }

    /// Wire bytes of this frame
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Frame::Ack => Ok(PN53X_ACK_FRAME.to_vec()),
            Frame::Nack => Ok(PN53X_NACK_FRAME.to_vec()),
            Frame::ApplicationError => Frame::encode(&[PN53X_APPLICATION_ERROR]),
            Frame::Information(payload) => Frame::encode(payload),
        }
    }

    /// Decode one frame from raw bytes read off the transport.
    ///
    /// Leading garbage before the `00 FF` start code is skipped (UART
    /// readers sometimes echo wakeup bytes), trailing bytes after the
    /// postamble are ignored.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        let start = raw
            .windows(2)
            .position(|w| w == [0x00, 0xFF])
            .ok_or_else(|| Error::FrameFormat("missing start code".into()))?;
        if start > 0 {
            trace!("skipping {} byte(s) before start code", start);
        }
        let frame = &raw[start + 2..];

        if frame.len() < 2 {
            return Err(Error::InvalidLength {
                expected: PN53X_MIN_FRAME_LEN,
                actual: raw.len(),
            });
        }

        match (frame[0], frame[1]) {
            (0x00, 0xFF) => return Ok(Frame::Ack),
            (0xFF, 0x00) => return Ok(Frame::Nack),
            (0xFF, 0xFF) => {
                return Err(Error::FrameFormat("extended frames are not supported".into()));
            }
            _ => {}
        }

        let len = frame[0];
        let lcs_actual = frame[1];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        // LEN LCS payload DCS postamble
        let required = 2 + len as usize + 2;
        if frame.len() < required {
            return Err(Error::InvalidLength {
                expected: start + 2 + required,
                actual: raw.len(),
            });
        }

        let payload = &frame[2..2 + len as usize];
        let dcs_actual = frame[2 + len as usize];
        let dcs_expected = dcs(payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[3 + len as usize] != PN53X_POSTAMBLE {
            return Err(Error::FrameFormat("invalid postamble".into()));
        }

        if payload == [PN53X_APPLICATION_ERROR] {
            return Ok(Frame::ApplicationError);
        }
        Ok(Frame::Information(payload.to_vec()))
    }

    /// Total number of bytes, counted from the start of `raw`, that the
    /// first frame in `raw` occupies. `None` until enough of the header has
    /// arrived to tell.
    pub fn wire_len(raw: &[u8]) -> Option<usize> {
        let start = raw.windows(2).position(|w| w == [0x00, 0xFF])?;
        let header = raw.get(start + 2..start + 4)?;
        match (header[0], header[1]) {
            // ACK / NACK: two code bytes and the postamble
            (0x00, 0xFF) | (0xFF, 0x00) => Some(start + 5),
            // extended frame; `decode` rejects it
            (0xFF, 0xFF) => Some(start + 4),
            (len, _) => Some(start + 2 + 2 + len as usize + 2),
        }
    }

    /// Decode and require an information frame, mapping the other kinds to
    /// their errors.
    pub fn decode_information(raw: &[u8]) -> Result<Vec<u8>> {
        match Frame::decode(raw)? {
            Frame::Information(payload) => Ok(payload),
            Frame::ApplicationError => Err(Error::ApplicationError),
            Frame::Nack => Err(Error::Nack),
            Frame::Ack => Err(Error::FrameFormat(
                "expected an information frame, got ACK".into(),
            )),
        }
    }
}
