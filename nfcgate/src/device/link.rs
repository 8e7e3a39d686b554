// nfcgate/src/device/link.rs

use log::{debug, trace};

use crate::constants::{ACK_TIMEOUT_MS, PN53X_ACK_FRAME};
use crate::protocol::{Command, Frame, Response, codec};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Owned connection to one chip.
///
/// Dropping the link switches the RF field off when it was switched on, then
/// closes the transport. Devices move the link between type states, so this
/// is the single place a connection is released.
pub struct Link {
    transport: Box<dyn Transport>,
    rf_active: bool,
}

impl Link {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            rf_active: false,
        }
    }

    pub fn wakeup(&mut self) -> Result<()> {
        self.transport.wakeup()
    }

    /// Mark the field as on so release switches it off again
    pub fn set_rf_active(&mut self, active: bool) {
        self.rf_active = active;
    }

    pub fn rf_active(&self) -> bool {
        self.rf_active
    }

    /// Send one command and wait `timeout_ms` for its answer.
    ///
    /// The chip acknowledges every well-formed command with an ACK frame
    /// first. When the answer does not arrive in time the pending command is
    /// aborted with an ACK from the host before the timeout is returned.
    pub fn exchange(&mut self, cmd: &Command, timeout_ms: u64) -> Result<Response> {
        let frame = codec::encode_command_frame(cmd)?;
        trace!("tx: {}", bytes_to_hex_spaced(&frame));
        self.transport.send(&frame)?;

        let ack = self.transport.receive(ACK_TIMEOUT_MS)?;
        match Frame::decode(&ack)? {
            Frame::Ack => {}
            Frame::Nack => return Err(Error::Nack),
            Frame::ApplicationError => return Err(Error::ApplicationError),
            Frame::Information(_) => {
                return Err(Error::FrameFormat(format!(
                    "expected ACK for command {:#04x}",
                    cmd.code()
                )));
            }
        }

        let raw = match self.transport.receive(timeout_ms) {
            Ok(raw) => raw,
            Err(e) if e.is_timeout() => {
                debug!(
                    "command {:#04x} got no answer within {} ms, aborting",
                    cmd.code(),
                    timeout_ms
                );
                self.abort();
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        trace!("rx: {}", bytes_to_hex_spaced(&raw));
        codec::decode_response_frame(cmd.code(), &raw)
    }

    /// Cancel whatever command the chip is still processing
    pub fn abort(&mut self) {
        if let Err(e) = self.transport.send(&PN53X_ACK_FRAME) {
            debug!("abort failed: {}", e);
        }
    }
}

impl Drop for Link {
    fn drop(&mut self) {
        if self.rf_active {
            if let Err(e) = self.exchange(&Command::RfField { on: false }, ACK_TIMEOUT_MS) {
                debug!("switching RF field off on release failed: {}", e);
            }
        }
        debug!("releasing reader link");
    }
}
