// nfcgate/src/target.rs

//! Targets detected by a poll, one variant per technology.

use log::{debug, trace};

use crate::protocol::parser::{byte_at, slice_at};
use crate::types::{Atqb, BaudRate, Idm, Modulation, ModulationType, Pmm, SystemCode, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// SEL_RES bit announcing ISO/IEC 14443-4 compliance (an ATS follows)
const SAK_ISO14443_4: u8 = 0x20;

/// Length byte of a FeliCa polling answer that carries a system code
const FELICA_POL_RES_WITH_SYSTEM_CODE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso14443aTarget {
    pub atqa: [u8; 2],
    pub sak: u8,
    pub uid: Uid,
    /// Answer to select without its TL byte, for ISO/IEC 14443-4 cards
    pub ats: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso14443bTarget {
    pub atqb: Atqb,
    pub attrib_res: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FelicaTarget {
    pub idm: Idm,
    pub pmm: Pmm,
    pub system_code: Option<SystemCode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JewelTarget {
    pub sens_res: [u8; 2],
    pub id: [u8; 4],
}

/// A card that answered a poll.
///
/// The variant is fixed by the modulation it answered on; FeliCa keeps its
/// bit rate as two variants because nothing else distinguishes the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Iso14443a(Iso14443aTarget),
    Iso14443b(Iso14443bTarget),
    Felica212(FelicaTarget),
    Felica424(FelicaTarget),
    Jewel(JewelTarget),
}

impl Target {
    /// Decode the target data that follows the `Tg` byte of an
    /// InListPassiveTarget or InAutoPoll answer.
    pub fn decode(modulation: Modulation, data: &[u8]) -> Result<Self> {
        trace!("decoding {} target: {}", modulation, bytes_to_hex_spaced(data));
        match (modulation.kind, modulation.baud) {
            (ModulationType::Iso14443a, BaudRate::Baud106) => {
                decode_iso14443a(data).map(Self::Iso14443a)
            }
            (ModulationType::Iso14443b, BaudRate::Baud106) => {
                decode_iso14443b(data).map(Self::Iso14443b)
            }
            (ModulationType::Felica, BaudRate::Baud212) => decode_felica(data).map(Self::Felica212),
            (ModulationType::Felica, BaudRate::Baud424) => decode_felica(data).map(Self::Felica424),
            (ModulationType::Jewel, BaudRate::Baud106) => decode_jewel(data).map(Self::Jewel),
            _ => Err(Error::UnsupportedModulation(modulation)),
        }
    }

    /// Modulation this target answered on
    pub fn modulation(&self) -> Modulation {
        match self {
            Self::Iso14443a(_) => Modulation::ISO14443A_106,
            Self::Iso14443b(_) => Modulation::ISO14443B_106,
            Self::Felica212(_) => Modulation::FELICA_212,
            Self::Felica424(_) => Modulation::FELICA_424,
            Self::Jewel(_) => Modulation::JEWEL_106,
        }
    }
}

/// `SENS_RES(2) SEL_RES(1) NFCIDLength(1) NFCID1 [ATS]`
fn decode_iso14443a(data: &[u8]) -> Result<Iso14443aTarget> {
    let atqa = slice_at(data, 0, 2)?;
    let sak = byte_at(data, 2)?;
    let uid_len = byte_at(data, 3)? as usize;
    let uid = Uid::try_from(slice_at(data, 4, uid_len)?)?;

    let mut ats = None;
    let ats_start = 4 + uid_len;
    if sak & SAK_ISO14443_4 != 0 && data.len() > ats_start {
        // TL counts itself
        let tl = data[ats_start] as usize;
        if tl > 1 {
            match slice_at(data, ats_start + 1, tl - 1) {
                Ok(bytes) => ats = Some(bytes.to_vec()),
                // The UID is complete; a short ATS only loses the optional part
                Err(e) => debug!("dropping truncated ATS: {}", e),
            }
        }
    }

    Ok(Iso14443aTarget {
        atqa: [atqa[0], atqa[1]],
        sak,
        uid,
        ats,
    })
}

/// `ATQB(12) ATTRIB_RES_Len(1) ATTRIB_RES`
fn decode_iso14443b(data: &[u8]) -> Result<Iso14443bTarget> {
    let atqb = Atqb::try_from(slice_at(data, 0, 12)?)?;
    let attrib_res = match data.get(12) {
        Some(&len) => slice_at(data, 13, len as usize)?.to_vec(),
        None => Vec::new(),
    };
    Ok(Iso14443bTarget { atqb, attrib_res })
}

/// `POL_RES_Len(1) 0x01 IDm(8) PMm(8) [SystemCode(2)]`
fn decode_felica(data: &[u8]) -> Result<FelicaTarget> {
    let len = byte_at(data, 0)? as usize;
    let code = byte_at(data, 1)?;
    if code != 0x01 {
        return Err(Error::UnexpectedResponse {
            expected: 0x01,
            actual: code,
        });
    }
    let idm = Idm::try_from(slice_at(data, 2, 8)?)?;
    let pmm = Pmm::try_from(slice_at(data, 10, 8)?)?;
    let system_code = if len >= FELICA_POL_RES_WITH_SYSTEM_CODE {
        let sc = slice_at(data, 18, 2)?;
        Some(SystemCode::from_be_bytes([sc[0], sc[1]]))
    } else {
        None
    };
    Ok(FelicaTarget {
        idm,
        pmm,
        system_code,
    })
}

/// `SENS_RES(2) JEWELID(4)`
fn decode_jewel(data: &[u8]) -> Result<JewelTarget> {
    let sens_res = slice_at(data, 0, 2)?;
    let id = slice_at(data, 2, 4)?;
    Ok(JewelTarget {
        sens_res: [sens_res[0], sens_res[1]],
        id: [id[0], id[1], id[2], id[3]],
    })
}
