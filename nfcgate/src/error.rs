// nfcgate/src/error.rs

use thiserror::Error;

use crate::types::Modulation;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to init reader context: {0}")]
    ContextUnavailable(String),

    #[error("unable to open NFC device")]
    DeviceUnavailable,

    #[error("unable to put NFC device into initiator mode: {0}")]
    InitiatorInitFailed(#[source] Box<Error>),

    // Hardware back-ends stay optional dependencies
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[cfg(feature = "uart")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("device did not acknowledge the command")]
    Nack,

    #[error("chip reported an application error")]
    ApplicationError,

    #[error("operation timed out")]
    Timeout,

    #[error("unsupported modulation: {0}")]
    UnsupportedModulation(Modulation),

    #[error("invalid connection string: {0}")]
    InvalidConnString(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl Error {
    /// True when the device simply did not answer in time.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::TimedOut,
            #[cfg(feature = "usb")]
            Error::Usb(rusb::Error::Timeout) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
