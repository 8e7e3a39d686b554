// nfcgate/src/protocol/commands/polling.rs

use crate::constants::{
    CMD_IN_AUTO_POLL, CMD_IN_LIST_PASSIVE_TARGET, FELICA_POLLING_PAYLOAD, PN53X_TFI_HOST,
};
use crate::types::{BaudRate, Modulation, ModulationType};
use crate::{Error, Result};

/// BrTy byte of InListPassiveTarget for a modulation.
pub fn brty(modulation: Modulation) -> Result<u8> {
    match (modulation.kind, modulation.baud) {
        (ModulationType::Iso14443a, BaudRate::Baud106) => Ok(0x00),
        (ModulationType::Felica, BaudRate::Baud212) => Ok(0x01),
        (ModulationType::Felica, BaudRate::Baud424) => Ok(0x02),
        (ModulationType::Iso14443b, BaudRate::Baud106) => Ok(0x03),
        (ModulationType::Jewel, BaudRate::Baud106) => Ok(0x04),
        _ => Err(Error::UnsupportedModulation(modulation)),
    }
}

/// Target type code understood by InAutoPoll.
pub fn auto_poll_type(modulation: Modulation) -> Result<u8> {
    match (modulation.kind, modulation.baud) {
        (ModulationType::Iso14443a, BaudRate::Baud106) => Ok(0x10),
        (ModulationType::Felica, BaudRate::Baud212) => Ok(0x11),
        (ModulationType::Felica, BaudRate::Baud424) => Ok(0x12),
        (ModulationType::Iso14443b, BaudRate::Baud106) => Ok(0x23),
        (ModulationType::Jewel, BaudRate::Baud106) => Ok(0x04),
        _ => Err(Error::UnsupportedModulation(modulation)),
    }
}

/// Modulation reported back by InAutoPoll for a target type code.
pub fn modulation_of_auto_poll_type(target_type: u8) -> Option<Modulation> {
    match target_type {
        0x00 | 0x10 | 0x20 => Some(Modulation::ISO14443A_106),
        0x01 | 0x11 => Some(Modulation::FELICA_212),
        0x02 | 0x12 => Some(Modulation::FELICA_424),
        0x03 | 0x23 => Some(Modulation::ISO14443B_106),
        0x04 => Some(Modulation::JEWEL_106),
        _ => None,
    }
}

/// Initiator data sent along with the BrTy byte
fn initiator_data(modulation: Modulation) -> &'static [u8] {
    match modulation.kind {
        // AFI 0x00: every application family
        ModulationType::Iso14443b => &[0x00],
        ModulationType::Felica => &FELICA_POLLING_PAYLOAD,
        ModulationType::Iso14443a | ModulationType::Jewel => &[],
    }
}

pub fn encode_in_list_passive_target(max_targets: u8, modulation: Modulation) -> Result<Vec<u8>> {
    if !(1..=2).contains(&max_targets) {
        return Err(Error::InvalidConfig(format!(
            "InListPassiveTarget handles 1 or 2 targets, got {max_targets}"
        )));
    }
    let mut out = vec![
        PN53X_TFI_HOST,
        CMD_IN_LIST_PASSIVE_TARGET,
        max_targets,
        brty(modulation)?,
    ];
    out.extend_from_slice(initiator_data(modulation));
    Ok(out)
}

pub fn encode_in_auto_poll(poll_nr: u8, period: u8, modulations: &[Modulation]) -> Result<Vec<u8>> {
    if modulations.is_empty() || modulations.len() > 15 {
        return Err(Error::InvalidLength {
            expected: 15,
            actual: modulations.len(),
        });
    }
    let mut out = Vec::with_capacity(4 + modulations.len());
    out.push(PN53X_TFI_HOST);
    out.push(CMD_IN_AUTO_POLL);
    out.push(poll_nr);
    out.push(period);
    for m in modulations {
        out.push(auto_poll_type(*m)?);
    }
    Ok(out)
}
