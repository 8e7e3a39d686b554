// nfcgate/src/device/models/mod.rs

use derive_more::Display;

use crate::constants::{IC_PN532, IC_PN533};
use crate::device::link::Link;
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::types::Modulation;
use crate::{Error, Result};

mod pn532;
mod pn533;

pub use pn532::Pn532Model;
pub use pn533::Pn533Model;

/// Timeout for configuration commands that answer immediately
pub(crate) const CONFIG_TIMEOUT_MS: u64 = 500;

/// Chip family, as reported by GetFirmwareVersion
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    #[display(fmt = "PN532")]
    Pn532,
    #[display(fmt = "PN533")]
    Pn533,
    #[display(fmt = "PN53x (IC {:#04x})", _0)]
    Other(u8),
}

impl Chip {
    pub fn from_ic(ic: u8) -> Self {
        match ic {
            IC_PN532 => Self::Pn532,
            IC_PN533 => Self::Pn533,
            other => Self::Other(other),
        }
    }
}

pub trait ChipModel {
    fn chip(&self) -> Chip;

    /// Configure the chip as a passive initiator and switch the RF field on.
    fn initiator_init(&self, link: &mut Link) -> Result<()> {
        configure_initiator(link)
    }

    /// Run one bounded poll over `modulations`. `Ok(None)` when no target
    /// answered in time.
    fn poll(
        &self,
        link: &mut Link,
        modulations: &[Modulation],
        poll_nr: u8,
        period: u8,
    ) -> Result<Option<Target>>;
}

/// Shared initiator setup: bounded retries, then RF field on.
///
/// Passive activation is retried once only so every poll attempt stays
/// bounded by the host-side timeout.
pub(crate) fn configure_initiator(link: &mut Link) -> Result<()> {
    expect_ack(
        link.exchange(
            &Command::MaxRetries {
                atr_res: 0x00,
                psl_res: 0x01,
                passive_activation: 0x01,
            },
            CONFIG_TIMEOUT_MS,
        )?,
        &Response::RfConfiguration,
    )?;
    // A half-applied field is still switched off on release
    link.set_rf_active(true);
    expect_ack(
        link.exchange(&Command::RfField { on: true }, CONFIG_TIMEOUT_MS)?,
        &Response::RfConfiguration,
    )
}

/// Check an answer is the expected empty acknowledgement
pub(crate) fn expect_ack(resp: Response, expected: &Response) -> Result<()> {
    if &resp == expected {
        Ok(())
    } else {
        Err(unexpected(resp))
    }
}

pub(crate) fn unexpected(resp: Response) -> Error {
    Error::FrameFormat(format!("unexpected answer: {:?}", resp))
}

/// Factory to create a model implementation for a chip. Chips other than the
/// PN532 are driven through InListPassiveTarget, which every PN53x knows.
pub fn create_model_for(chip: Chip) -> Box<dyn ChipModel> {
    match chip {
        Chip::Pn532 => Box::new(Pn532Model),
        Chip::Pn533 | Chip::Other(_) => Box::new(Pn533Model::new(chip)),
    }
}
