// nfcgate/src/device/models/pn532.rs

//! PN532: the chip arbitrates the probe order itself through InAutoPoll.

use log::{debug, warn};

use super::{CONFIG_TIMEOUT_MS, Chip, ChipModel, expect_ack, unexpected};
use crate::device::link::Link;
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::types::Modulation;
use crate::utils::auto_poll_timeout_ms;
use crate::{Error, Result};

pub struct Pn532Model;

impl ChipModel for Pn532Model {
    fn chip(&self) -> Chip {
        Chip::Pn532
    }

    fn initiator_init(&self, link: &mut Link) -> Result<()> {
        // The PN532 refuses RF commands until its SAM has been configured
        expect_ack(
            link.exchange(&Command::SamConfiguration, CONFIG_TIMEOUT_MS)?,
            &Response::SamConfiguration,
        )?;
        super::configure_initiator(link)
    }

    fn poll(
        &self,
        link: &mut Link,
        modulations: &[Modulation],
        poll_nr: u8,
        period: u8,
    ) -> Result<Option<Target>> {
        let cmd = Command::InAutoPoll {
            poll_nr,
            period,
            modulations: modulations.to_vec(),
        };
        let timeout = auto_poll_timeout_ms(modulations.len(), poll_nr, period);
        debug!("InAutoPoll over {} modulation(s), {} ms", modulations.len(), timeout);

        let targets = match link.exchange(&cmd, timeout) {
            Ok(Response::InAutoPoll { targets }) => targets,
            Ok(other) => return Err(unexpected(other)),
            Err(e) if e.is_timeout() => return Ok(None),
            Err(e) => return Err(e),
        };
        if targets.len() > 1 {
            warn!("{} targets answered, keeping the first", targets.len());
        }
        let Some(first) = targets.into_iter().next() else {
            return Ok(None);
        };
        let modulation = first.modulation().ok_or_else(|| {
            Error::FrameFormat(format!("unknown target type {:#04x}", first.target_type))
        })?;
        Target::decode(modulation, &first.target.data).map(Some)
    }
}
