// nfcgate/src/device/models/pn533.rs

//! PN533 and other PN53x chips: one InListPassiveTarget per modulation.

use log::{debug, trace};

use super::{Chip, ChipModel, unexpected};
use crate::device::link::Link;
use crate::protocol::{Command, Response};
use crate::target::Target;
use crate::types::Modulation;
use crate::utils::period_timeout_ms;
use crate::Result;

pub struct Pn533Model {
    chip: Chip,
}

impl Pn533Model {
    pub fn new(chip: Chip) -> Self {
        Self { chip }
    }
}

impl ChipModel for Pn533Model {
    fn chip(&self) -> Chip {
        self.chip
    }

    fn poll(
        &self,
        link: &mut Link,
        modulations: &[Modulation],
        poll_nr: u8,
        period: u8,
    ) -> Result<Option<Target>> {
        let timeout = period_timeout_ms(period);
        for round in 0..poll_nr {
            for &modulation in modulations {
                trace!("round {}: InListPassiveTarget {}", round, modulation);
                let cmd = Command::InListPassiveTarget {
                    max_targets: 1,
                    modulation,
                };
                match link.exchange(&cmd, timeout) {
                    Ok(Response::InListPassiveTarget { first: None, .. }) => {}
                    Ok(Response::InListPassiveTarget {
                        first: Some(target),
                        ..
                    }) => return Target::decode(modulation, &target.data).map(Some),
                    Ok(other) => return Err(unexpected(other)),
                    // the link already aborted the command
                    Err(e) if e.is_timeout() => debug!("no {} target", modulation),
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(None)
    }
}
