// nfcgate/src/config.rs

//! Runtime configuration of the two entry points.

use std::time::Duration;

use crate::constants::DEFAULT_ANNOUNCE_ENDPOINT;
use crate::poller::{PollSettings, ProbeTable};
use crate::transport::ConnString;

/// Which devices the drivers may discover on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverOptions {
    /// Probe every serial port when no connection string is given. Off by
    /// default: probing writes a wake-up sequence to whatever is attached.
    pub uart_autoscan: bool,
}

/// What to poll, where and for how long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// `None` opens the first reader that answers
    pub connstring: Option<ConnString>,
    pub probe_table: ProbeTable,
    pub poll: PollSettings,
    pub drivers: DriverOptions,
}

/// Where door status announcements go.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NotifierConfig {
    /// `host:port`
    pub endpoint: String,
    /// `None` leaves the platform connect timeout in place
    pub connect_timeout: Option<Duration>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ANNOUNCE_ENDPOINT.to_string(),
            connect_timeout: None,
        }
    }
}
