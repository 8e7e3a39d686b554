// nfcgate/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, info};

use crate::device::context::Context;
use crate::device::link::Link;
use crate::device::models::{CONFIG_TIMEOUT_MS, Chip, ChipModel, create_model_for, unexpected};
use crate::protocol::{Command, FirmwareVersion, Response};
use crate::target::Target;
use crate::transport::{ConnString, Transport};
use crate::types::Modulation;
use crate::{Error, Result};

/// Type-state markers
pub struct Idle;
pub struct Initiator;

/// Handle on one opened reader.
///
/// The handle borrows the [`Context`] it was opened from and cannot outlive
/// it. Only an `Initiator` device can poll. Dropping the handle in any state
/// releases the reader.
pub struct Device<'ctx, State = Idle> {
    link: Link,
    model: Box<dyn ChipModel>,
    firmware: FirmwareVersion,
    connstring: ConnString,
    _ctx: PhantomData<&'ctx Context>,
    _state: PhantomData<State>,
}

impl<'ctx> Device<'ctx, Idle> {
    /// Wake the chip behind `transport` and identify it.
    pub(crate) fn open(
        _ctx: &'ctx Context,
        connstring: ConnString,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let mut link = Link::new(transport);
        link.wakeup()?;
        let firmware = match link.exchange(&Command::GetFirmwareVersion, CONFIG_TIMEOUT_MS)? {
            Response::FirmwareVersion(fw) => fw,
            other => return Err(unexpected(other)),
        };
        let chip = Chip::from_ic(firmware.ic);
        info!(
            "opened {} ({} firmware {}.{})",
            connstring, chip, firmware.version, firmware.revision
        );

        Ok(Self {
            link,
            model: create_model_for(chip),
            firmware,
            connstring,
            _ctx: PhantomData,
            _state: PhantomData,
        })
    }

    /// Put the device into the initiator role with the RF field on.
    ///
    /// On failure the device is released and the cause is wrapped in
    /// [`Error::InitiatorInitFailed`].
    pub fn initiator_init(self) -> Result<Device<'ctx, Initiator>> {
        let Device {
            mut link,
            model,
            firmware,
            connstring,
            ..
        } = self;

        if let Err(e) = model.initiator_init(&mut link) {
            debug!("initiator setup of {} failed: {}", connstring, e);
            return Err(Error::InitiatorInitFailed(Box::new(e)));
        }

        Ok(Device {
            link,
            model,
            firmware,
            connstring,
            _ctx: PhantomData,
            _state: PhantomData,
        })
    }
}

impl<State> Device<'_, State> {
    pub fn chip(&self) -> Chip {
        self.model.chip()
    }

    pub fn firmware(&self) -> FirmwareVersion {
        self.firmware
    }

    pub fn connstring(&self) -> &ConnString {
        &self.connstring
    }
}

impl Device<'_, Initiator> {
    /// Poll for one passive target over `modulations`.
    ///
    /// Returns `Ok(None)` when nothing answered within `poll_nr` rounds of
    /// `period` × 150 ms. When several targets answer, the first wins.
    pub fn poll_target(
        &mut self,
        modulations: &[Modulation],
        poll_nr: u8,
        period: u8,
    ) -> Result<Option<Target>> {
        let found = self
            .model
            .poll(&mut self.link, modulations, poll_nr, period)?;
        if let Some(target) = &found {
            info!("{} target detected", target.modulation());
        }
        Ok(found)
    }
}
