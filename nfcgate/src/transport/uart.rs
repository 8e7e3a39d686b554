// nfcgate/src/transport/uart.rs

//! PN532 boards on a serial line (HSU, 115200 8N1).

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use log::{debug, trace};
use serialport::{ClearBuffer, SerialPort};

use crate::protocol::Frame;
use crate::transport::driver::{ConnString, Driver};
use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

const DRIVER_NAME: &str = "pn532_uart";
const BAUD_RATE: u32 = 115_200;

/// Long preamble that wakes a PN532 from power-down on HSU
const WAKEUP_PREAMBLE: [u8; 16] = [
    0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Driver for PN532 boards on serial ports.
///
/// Serial readers open from an explicit connection string. Scanning lists
/// the host's ports only when autoscan was switched on.
#[derive(Debug, Default)]
pub struct UartDriver {
    autoscan: bool,
}

impl UartDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autoscan(mut self, autoscan: bool) -> Self {
        self.autoscan = autoscan;
        self
    }
}

impl Driver for UartDriver {
    fn name(&self) -> &str {
        DRIVER_NAME
    }

    fn scan(&self) -> Result<Vec<ConnString>> {
        if !self.autoscan {
            debug!("serial autoscan is off; give a {} connection string", DRIVER_NAME);
            return Ok(Vec::new());
        }
        Ok(serialport::available_ports()?
            .into_iter()
            .map(|info| ConnString::new(DRIVER_NAME, Some(info.port_name)))
            .collect())
    }

    fn open(&self, connstring: &ConnString) -> Result<Box<dyn Transport>> {
        let port = connstring
            .port()
            .ok_or_else(|| Error::InvalidConnString(format!("{connstring}: missing serial port")))?;
        Ok(Box::new(UartTransport::open(port)?))
    }
}

pub struct UartTransport {
    port: Box<dyn SerialPort>,
    /// Bytes read past the end of the previous frame (ACK and answer often
    /// arrive in one read)
    pending: Vec<u8>,
}

impl UartTransport {
    pub fn open(path: &str) -> Result<Self> {
        debug!("opening serial port {} at {} baud", path, BAUD_RATE);
        let port = serialport::new(path, BAUD_RATE)
            .timeout(crate::utils::default_read_timeout())
            .open()?;
        Ok(Self {
            port,
            pending: Vec::new(),
        })
    }
}

impl Transport for UartTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    /// Read until one complete frame has arrived or the timeout expires.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        let mut acc = std::mem::take(&mut self.pending);
        let mut chunk = [0u8; 64];

        loop {
            if let Some(total) = Frame::wire_len(&acc) {
                if acc.len() >= total {
                    self.pending = acc.split_off(total);
                    trace!("uart rx: {}", bytes_to_hex_spaced(&acc));
                    return Ok(acc);
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(Error::Timeout);
            }
            self.port.set_timeout(remaining)?;
            match self.port.read(&mut chunk) {
                Ok(0) => return Err(Error::Timeout),
                Ok(n) => acc.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::TimedOut => return Err(Error::Timeout),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.pending.clear();
        self.port.clear(ClearBuffer::All)?;
        Ok(())
    }

    fn wakeup(&mut self) -> Result<()> {
        self.reset()?;
        self.send(&WAKEUP_PREAMBLE)
    }
}
