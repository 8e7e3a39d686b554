// nfcgate/src/poller.rs

//! One bounded polling attempt over an ordered probe table.

use std::str::FromStr;

use log::{debug, warn};

use crate::device::{Device, Initiator};
use crate::protocol::commands::brty;
use crate::target::Target;
use crate::types::Modulation;
use crate::{Error, Result};

/// Ordered, non-empty list of modulations to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Modulation>", into = "Vec<Modulation>"))]
pub struct ProbeTable(Vec<Modulation>);

impl ProbeTable {
    /// Reject an empty table and any modulation a PN53x cannot activate.
    pub fn new(modulations: Vec<Modulation>) -> Result<Self> {
        if modulations.is_empty() {
            return Err(Error::InvalidConfig("probe table is empty".into()));
        }
        for m in &modulations {
            brty(*m)?;
        }
        Ok(Self(modulations))
    }

    pub fn modulations(&self) -> &[Modulation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ProbeTable {
    /// ISO/IEC 14443-A, ISO/IEC 14443-B, FeliCa 212, FeliCa 424, Jewel
    fn default() -> Self {
        Self(vec![
            Modulation::ISO14443A_106,
            Modulation::ISO14443B_106,
            Modulation::FELICA_212,
            Modulation::FELICA_424,
            Modulation::JEWEL_106,
        ])
    }
}

impl TryFrom<Vec<Modulation>> for ProbeTable {
    type Error = Error;

    fn try_from(modulations: Vec<Modulation>) -> Result<Self> {
        Self::new(modulations)
    }
}

impl From<ProbeTable> for Vec<Modulation> {
    fn from(table: ProbeTable) -> Self {
        table.0
    }
}

/// Comma separated `type:rate` list, e.g. `iso14443a:106,felica:212`
impl FromStr for ProbeTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let modulations = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Modulation>>>()?;
        Self::new(modulations)
    }
}

/// Poll budget: `poll_nr` rounds of `period` × 150 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollSettings {
    pub poll_nr: u8,
    pub period: u8,
}

impl PollSettings {
    pub const MAX_POLL_NR: u8 = 0xfe;
    pub const MAX_PERIOD: u8 = 0x0f;

    pub fn new(poll_nr: u8, period: u8) -> Result<Self> {
        let settings = Self { poll_nr, period };
        settings.validate()?;
        Ok(settings)
    }

    /// `poll_nr` 0xFF would make the chip poll forever
    pub fn validate(&self) -> Result<()> {
        if !(1..=Self::MAX_POLL_NR).contains(&self.poll_nr) {
            return Err(Error::InvalidConfig(format!(
                "poll count must be within 1..={}, got {}",
                Self::MAX_POLL_NR,
                self.poll_nr
            )));
        }
        if !(1..=Self::MAX_PERIOD).contains(&self.period) {
            return Err(Error::InvalidConfig(format!(
                "poll period must be within 1..={}, got {}",
                Self::MAX_PERIOD,
                self.period
            )));
        }
        Ok(())
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            poll_nr: 1,
            period: 1,
        }
    }
}

/// Result of one polling attempt. A device fault is an outcome, not an
/// error, so callers can tell it apart from an empty field.
#[derive(Debug)]
pub enum PollOutcome {
    Found(Target),
    NotFound,
    Error(Error),
}

/// Run exactly one bounded poll cycle over `table`.
pub fn poll_once(
    device: &mut Device<'_, Initiator>,
    table: &ProbeTable,
    settings: PollSettings,
) -> PollOutcome {
    debug!(
        "polling {} modulation(s), {} round(s) of period {}",
        table.len(),
        settings.poll_nr,
        settings.period
    );
    match device.poll_target(table.modulations(), settings.poll_nr, settings.period) {
        Ok(Some(target)) => PollOutcome::Found(target),
        Ok(None) => PollOutcome::NotFound,
        Err(e) => {
            warn!("polling failed: {}", e);
            PollOutcome::Error(e)
        }
    }
}
