// nfcgate/src/protocol/responses/polling.rs

use crate::protocol::commands::polling::modulation_of_auto_poll_type;
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::Modulation;
use crate::{Error, Result};

/// Logical target number plus the technology-specific target data that
/// follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveTarget {
    pub tg: u8,
    pub data: Vec<u8>,
}

/// One entry of an InAutoPoll answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPollTarget {
    pub target_type: u8,
    pub target: PassiveTarget,
}

impl AutoPollTarget {
    pub fn modulation(&self) -> Option<Modulation> {
        modulation_of_auto_poll_type(self.target_type)
    }
}

/// `NbTg [Tg TargetData]...`
///
/// Target data is not self-delimiting without knowing the modulation, so
/// only the first target is split out; it keeps every byte after its `Tg`.
pub fn decode_in_list_passive_target(body: &[u8]) -> Result<(u8, Option<PassiveTarget>)> {
    let count = byte_at(body, 0)?;
    if count == 0 {
        return Ok((0, None));
    }
    let tg = byte_at(body, 1)?;
    Ok((
        count,
        Some(PassiveTarget {
            tg,
            data: body[2..].to_vec(),
        }),
    ))
}

/// `NbTg [Type Len Tg TargetData]...` where `Len` covers `Tg` and the data.
pub fn decode_in_auto_poll(body: &[u8]) -> Result<Vec<AutoPollTarget>> {
    let count = byte_at(body, 0)? as usize;
    let mut targets = Vec::with_capacity(count);
    let mut idx = 1usize;
    for _ in 0..count {
        let target_type = byte_at(body, idx)?;
        let len = byte_at(body, idx + 1)? as usize;
        if len == 0 {
            return Err(Error::FrameFormat(
                "InAutoPoll target entry without target number".into(),
            ));
        }
        let entry = slice_at(body, idx + 2, len)?;
        targets.push(AutoPollTarget {
            target_type,
            target: PassiveTarget {
                tg: entry[0],
                data: entry[1..].to_vec(),
            },
        });
        idx += 2 + len;
    }
    Ok(targets)
}
