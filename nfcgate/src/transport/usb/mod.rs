// nfcgate/src/transport/usb/mod.rs

//! PN533-family readers on USB bulk endpoints.

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::transport::driver::{ConnString, Driver};
use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

mod descriptor;
use descriptor::{Endpoints, find_endpoints};

/// Vendor id, product id and name of every supported reader
pub const SUPPORTED_DEVICES: &[(u16, u16, &str)] = &[
    (0x04cc, 0x2533, "NXP PN533"),
    (0x04e6, 0x5591, "SCM Micro SCL3711"),
    (0x054c, 0x02e1, "Sony RC-S360/S330"),
];

const DRIVER_NAME: &str = "pn533_usb";
const WRITE_TIMEOUT_MS: u64 = 1000;
const MAX_PACKET: usize = 512;

fn supported_name(vendor_id: u16, product_id: u16) -> Option<&'static str> {
    SUPPORTED_DEVICES
        .iter()
        .find(|(vid, pid, _)| *vid == vendor_id && *pid == product_id)
        .map(|(_, _, name)| *name)
}

fn port_of<C: UsbContext>(device: &Device<C>) -> String {
    format!("{:03}:{:03}", device.bus_number(), device.address())
}

/// Driver enumerating PN533-family readers through one libusb context.
pub struct UsbDriver {
    ctx: Context,
}

impl UsbDriver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ctx: Context::new()?,
        })
    }

    fn supported_devices(&self) -> Result<Vec<(Device<Context>, &'static str)>> {
        let mut out = Vec::new();
        for device in self.ctx.devices()?.iter() {
            let dd = match device.device_descriptor() {
                Ok(dd) => dd,
                Err(e) => {
                    debug!("skipping usb device without descriptor: {}", e);
                    continue;
                }
            };
            if let Some(name) = supported_name(dd.vendor_id(), dd.product_id()) {
                out.push((device, name));
            }
        }
        Ok(out)
    }
}

impl Driver for UsbDriver {
    fn name(&self) -> &str {
        DRIVER_NAME
    }

    fn scan(&self) -> Result<Vec<ConnString>> {
        Ok(self
            .supported_devices()?
            .iter()
            .map(|(device, _)| ConnString::new(DRIVER_NAME, Some(port_of(device))))
            .collect())
    }

    fn open(&self, connstring: &ConnString) -> Result<Box<dyn Transport>> {
        for (device, name) in self.supported_devices()? {
            if let Some(port) = connstring.port() {
                if port != port_of(&device) {
                    continue;
                }
            }
            debug!("opening {} at {}", name, port_of(&device));
            return Ok(Box::new(UsbTransport::open(&device)?));
        }
        Err(Error::DeviceUnavailable)
    }
}

/// Bulk-endpoint link to one reader. The claimed interface is released on drop.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    endpoints: Endpoints,
}

impl UsbTransport {
    pub fn open(device: &Device<Context>) -> Result<Self> {
        let endpoints = find_endpoints(device).ok_or_else(|| {
            Error::FrameFormat("reader exposes no bulk endpoint pair".into())
        })?;
        let mut handle = device.open()?;

        // The kernel may have bound a driver (pn533, port100) to the interface
        if let Ok(true) = handle.kernel_driver_active(endpoints.interface) {
            if let Err(e) = handle.detach_kernel_driver(endpoints.interface) {
                warn!("unable to detach kernel driver: {}", e);
            }
        }
        if let Err(e) = handle.set_active_configuration(1) {
            debug!("set_active_configuration(1) failed: {}", e);
        }
        handle.claim_interface(endpoints.interface)?;

        Ok(Self { handle, endpoints })
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let timeout = Duration::from_millis(WRITE_TIMEOUT_MS);
        let ep = self.endpoints.bulk_out;

        // A stalled endpoint gets its halt cleared and a short backoff
        let mut last_err = None;
        for attempt in 1..=3u64 {
            match self.handle.write_bulk(ep, data, timeout) {
                Ok(_) => return Ok(()),
                Err(rusb::Error::Pipe) => {
                    last_err = Some(rusb::Error::Pipe);
                    let _ = self.handle.clear_halt(ep);
                    std::thread::sleep(Duration::from_millis(20 * attempt));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(last_err.map(Error::from).unwrap_or(Error::Timeout))
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let timeout = Duration::from_millis(timeout_ms);
        let ep = self.endpoints.bulk_in;
        let mut buf = vec![0u8; MAX_PACKET];

        let n = match self.handle.read_bulk(ep, &mut buf, timeout) {
            Ok(n) => n,
            Err(rusb::Error::Pipe) => {
                self.handle.clear_halt(ep)?;
                self.handle.read_bulk(ep, &mut buf, timeout)?
            }
            Err(e) => return Err(e.into()),
        };
        buf.truncate(n);
        log::trace!("usb rx: {}", bytes_to_hex_spaced(&buf));
        Ok(buf)
    }

    fn reset(&mut self) -> Result<()> {
        self.handle.clear_halt(self.endpoints.bulk_in)?;
        self.handle.clear_halt(self.endpoints.bulk_out)?;
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.endpoints.interface) {
            debug!("release_interface failed: {}", e);
        }
    }
}
