// nfcgate/src/notifier.rs

//! Best-effort door status announcement.
//!
//! An announcement is one short-lived TCP connection to the configured
//! endpoint, shut down in both directions and closed again. Nothing is sent
//! and every failure is absorbed.

use std::io;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use log::{debug, info};

use crate::Error;
use crate::config::NotifierConfig;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoorState {
    #[display(fmt = "closed")]
    Closed,
    #[display(fmt = "open")]
    Open,
}

impl From<bool> for DoorState {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

/// Exactly `0` (closed) or `1` (open)
impl FromStr for DoorState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Closed),
            "1" => Ok(Self::Open),
            other => Err(Error::InvalidConfig(format!(
                "door state must be 0 or 1, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    endpoint: String,
    connect_timeout: Option<Duration>,
}

impl Notifier {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            connect_timeout: config.connect_timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Announce `state`. Never fails; the outcome is only logged.
    pub fn announce(&self, state: DoorState) {
        info!("announcing door {} to {}", state, self.endpoint);
        match self.try_announce() {
            Ok(()) => debug!("announcement to {} done", self.endpoint),
            Err(e) => debug!("announcement to {} failed: {}", self.endpoint, e),
        }
    }

    fn try_announce(&self) -> io::Result<()> {
        let addr = self.endpoint.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} resolves to no address", self.endpoint),
            )
        })?;
        let stream = match self.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout)?,
            None => TcpStream::connect(addr)?,
        };
        stream.shutdown(Shutdown::Both)?;
        Ok(())
    }
}

/// Announce `state` to the default endpoint
pub fn announce(state: DoorState) {
    Notifier::new(&NotifierConfig::default()).announce(state);
}
