// nfcgate/src/cli.rs

//! Command line surfaces of the two binaries.

use std::ffi::OsString;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::error;

use crate::config::{DriverOptions, NotifierConfig, ReaderConfig};
use crate::constants::DEFAULT_ANNOUNCE_ENDPOINT;
use crate::notifier::DoorState;
use crate::poller::{PollSettings, ProbeTable};
use crate::transport::ConnString;
use crate::types::Modulation;
use crate::Result;

/// Detect one contactless card and print its identifier.
#[derive(Debug, Parser)]
#[command(name = "nfc-getcard", version)]
pub struct GetCardArgs {
    /// Reader connection string, e.g. pn532_uart:/dev/ttyUSB0 (default: first reader found)
    #[arg(short, long, env = "NFCGATE_DEVICE")]
    pub device: Option<ConnString>,

    /// Modulation to probe as type:rate, in order (default: every supported one)
    #[arg(
        short,
        long = "modulation",
        env = "NFCGATE_MODULATIONS",
        value_delimiter = ','
    )]
    pub modulations: Vec<Modulation>,

    /// Polling rounds
    #[arg(
        long,
        env = "NFCGATE_POLL_NR",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=254)
    )]
    pub poll_nr: u8,

    /// Polling period, in units of 150 ms
    #[arg(
        long,
        env = "NFCGATE_POLL_PERIOD",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=15)
    )]
    pub period: u8,

    /// Also probe every serial port for a PN532 when no device is given
    #[arg(long, env = "NFCGATE_UART_AUTOSCAN")]
    pub uart_autoscan: bool,
}

impl GetCardArgs {
    pub fn into_config(self) -> Result<ReaderConfig> {
        let probe_table = if self.modulations.is_empty() {
            ProbeTable::default()
        } else {
            ProbeTable::new(self.modulations)?
        };
        Ok(ReaderConfig {
            connstring: self.device,
            probe_table,
            poll: PollSettings::new(self.poll_nr, self.period)?,
            drivers: DriverOptions {
                uart_autoscan: self.uart_autoscan,
            },
        })
    }
}

/// Announce the door status.
#[derive(Debug, Parser)]
#[command(name = "door-status", version, override_usage = "door-status [0|1]")]
pub struct AnnounceArgs {
    /// 0 = closed, 1 = open
    pub state: DoorState,

    /// Anything after the state is accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,

    /// Announcement endpoint as host:port
    #[arg(long, env = "NFCGATE_ENDPOINT", default_value = DEFAULT_ANNOUNCE_ENDPOINT)]
    pub endpoint: String,

    /// Connect timeout in milliseconds (default: the platform's)
    #[arg(long = "connect-timeout-ms", env = "NFCGATE_CONNECT_TIMEOUT_MS")]
    pub connect_timeout_ms: Option<u64>,
}

impl AnnounceArgs {
    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            endpoint: self.endpoint.clone(),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Parsed arguments, or the exit status to leave with right away.
#[derive(Debug)]
pub enum Invocation<T> {
    Run(T),
    Exit(u8),
}

/// Parse `args`. Help and version print and exit 0; any other problem logs
/// the parser's message, prints the usage line on stdout and exits 1.
pub fn parse_args<P, I, T>(args: I) -> Invocation<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Invocation::Run(parsed),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Invocation::Exit(0)
        }
        Err(e) => {
            error!("{}", e.kind());
            println!("{}", P::command().render_usage());
            Invocation::Exit(1)
        }
    }
}
