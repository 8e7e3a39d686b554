// nfcgate/src/transport/driver.rs

use std::fmt;
use std::str::FromStr;

use crate::transport::Transport;
use crate::{Error, Result};

/// Where to find a reader: `driver[:port]`, e.g. `pn532_uart:/dev/ttyUSB0`,
/// `pn533_usb` or `pn533_usb:001:004`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ConnString {
    driver: String,
    port: Option<String>,
}

impl ConnString {
    pub fn new(driver: impl Into<String>, port: Option<String>) -> Self {
        Self {
            driver: driver.into(),
            port,
        }
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }
}

impl FromStr for ConnString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (driver, port) = match s.split_once(':') {
            Some((driver, port)) => (driver, Some(port)),
            None => (s, None),
        };
        if driver.is_empty() {
            return Err(Error::InvalidConnString(s.to_string()));
        }
        if port.is_some_and(str::is_empty) {
            return Err(Error::InvalidConnString(s.to_string()));
        }
        Ok(Self::new(driver, port.map(str::to_string)))
    }
}

impl TryFrom<String> for ConnString {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ConnString> for String {
    fn from(cs: ConnString) -> Self {
        cs.to_string()
    }
}

impl fmt::Display for ConnString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.port {
            Some(port) => write!(f, "{}:{}", self.driver, port),
            None => f.write_str(&self.driver),
        }
    }
}

/// A family of readers reachable through one kind of link.
pub trait Driver {
    /// Name used as the driver part of a connection string
    fn name(&self) -> &str;

    /// Connection strings of the devices this driver can currently see
    fn scan(&self) -> Result<Vec<ConnString>>;

    /// Open the link to the device named by `connstring`
    fn open(&self, connstring: &ConnString) -> Result<Box<dyn Transport>>;
}
