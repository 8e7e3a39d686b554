// nfcgate/src/session.rs

//! A single detection attempt: open, activate, poll once, print.

use std::io::Write;

use log::{debug, info};

use crate::config::ReaderConfig;
use crate::device::{Context, Device, Initiator};
use crate::identify::{extract, identify};
use crate::poller::{PollOutcome, PollSettings, ProbeTable, poll_once};
use crate::transport::ConnString;
use crate::types::{Modulation, Uid};
use crate::{Error, Result};

/// Exclusive use of one reader in the initiator role. The reader is released
/// when the session is dropped.
pub struct ReaderSession<'ctx> {
    device: Device<'ctx, Initiator>,
}

impl<'ctx> ReaderSession<'ctx> {
    /// Open a reader and put it in the initiator role.
    ///
    /// Fails with `DeviceUnavailable` or `InitiatorInitFailed`; in both cases
    /// nothing stays claimed.
    pub fn open(context: &'ctx Context, connstring: Option<&ConnString>) -> Result<Self> {
        let device = context.open(connstring)?;
        let device = device.initiator_init()?;
        Ok(Self { device })
    }

    pub fn device(&self) -> &Device<'ctx, Initiator> {
        &self.device
    }

    pub fn poll(&mut self, table: &ProbeTable, settings: PollSettings) -> PollOutcome {
        poll_once(&mut self.device, table, settings)
    }
}

/// How a detection attempt ended, short of a fatal error.
#[derive(Debug)]
pub enum Detection {
    /// An identifier was written out
    Identified(Uid),
    /// A target answered but its family has no decodable identifier
    Undecodable(Modulation),
    NotFound,
    /// The device faulted mid-poll
    PollFailed(Error),
}

/// Run one detection attempt and write the identifier line, if any, to `out`.
///
/// Errors are the fatal cases: no reader, no initiator role, bad settings
/// or a failed write.
pub fn detect<W: Write>(context: &Context, config: &ReaderConfig, out: &mut W) -> Result<Detection> {
    config.poll.validate()?;
    let mut session = ReaderSession::open(context, config.connstring.as_ref())?;

    let detection = match session.poll(&config.probe_table, config.poll) {
        PollOutcome::Found(target) => match (identify(&target), extract(&target)) {
            (Some(uid), Some(line)) => {
                out.write_all(line.as_bytes())?;
                out.flush()?;
                Detection::Identified(uid.clone())
            }
            _ => {
                info!("{} target has no decodable identifier", target.modulation());
                Detection::Undecodable(target.modulation())
            }
        },
        PollOutcome::NotFound => {
            debug!("no target in range");
            Detection::NotFound
        }
        PollOutcome::Error(e) => Detection::PollFailed(e),
    };
    Ok(detection)
}

/// Process exit status for a detection attempt: every completed attempt
/// exits 0, fatal errors exit 1.
pub fn exit_code(result: &Result<Detection>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
