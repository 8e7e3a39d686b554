// nfcgate/src/device/context.rs

use log::{debug, warn};

use crate::config::DriverOptions;
use crate::device::handle::{Device, Idle};
use crate::transport::{ConnString, Driver};
use crate::{Error, Result};

/// Process-wide reader context: the registry of drivers devices are opened
/// through. Devices borrow the context, so it always outlives them.
pub struct Context {
    drivers: Vec<Box<dyn Driver>>,
}

impl Context {
    /// Acquire the context with every driver compiled into the crate, using
    /// the default driver options.
    pub fn init() -> Result<Self> {
        Self::init_with(&DriverOptions::default())
    }

    /// Acquire the context with every driver compiled into the crate.
    #[cfg_attr(not(feature = "uart"), allow(unused_variables))]
    pub fn init_with(options: &DriverOptions) -> Result<Self> {
        #[allow(unused_mut)]
        let mut drivers: Vec<Box<dyn Driver>> = Vec::new();

        #[cfg(feature = "usb")]
        {
            let usb = crate::transport::UsbDriver::new()
                .map_err(|e| Error::ContextUnavailable(e.to_string()))?;
            drivers.push(Box::new(usb));
        }
        #[cfg(feature = "uart")]
        drivers.push(Box::new(
            crate::transport::UartDriver::new().with_autoscan(options.uart_autoscan),
        ));

        if drivers.is_empty() {
            warn!("no reader driver compiled in; enable the `usb` or `uart` feature");
        }
        Ok(Self::with_drivers(drivers))
    }

    /// Context over an explicit driver set
    pub fn with_drivers(drivers: Vec<Box<dyn Driver>>) -> Self {
        debug!("reader context with {} driver(s)", drivers.len());
        Self { drivers }
    }

    pub fn register(&mut self, driver: Box<dyn Driver>) {
        self.drivers.push(driver);
    }

    pub fn driver_names(&self) -> Vec<&str> {
        self.drivers.iter().map(|d| d.name()).collect()
    }

    /// Connection strings of every device the drivers can see. Drivers that
    /// fail to scan are skipped.
    pub fn list_devices(&self) -> Vec<ConnString> {
        let mut found = Vec::new();
        for driver in &self.drivers {
            match driver.scan() {
                Ok(mut list) => found.append(&mut list),
                Err(e) => debug!("{} scan failed: {}", driver.name(), e),
            }
        }
        found
    }

    /// Open the device named by `connstring`, or the first device that
    /// answers when none is given.
    ///
    /// Every failure to reach a responding chip maps to
    /// [`Error::DeviceUnavailable`]; the cause is logged.
    pub fn open(&self, connstring: Option<&ConnString>) -> Result<Device<'_, Idle>> {
        let candidates = match connstring {
            Some(cs) => vec![cs.clone()],
            None => self.list_devices(),
        };

        for cs in candidates {
            let Some(driver) = self.drivers.iter().find(|d| d.name() == cs.driver()) else {
                debug!("no driver named {}", cs.driver());
                continue;
            };
            let opened = driver
                .open(&cs)
                .and_then(|transport| Device::open(self, cs.clone(), transport));
            match opened {
                Ok(device) => return Ok(device),
                Err(e) => debug!("unable to open {}: {}", cs, e),
            }
        }
        Err(Error::DeviceUnavailable)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        debug!("releasing reader context");
    }
}
