// nfcgate/src/transport/mod.rs

pub mod driver;
pub mod mock;
pub mod traits;
#[cfg(feature = "uart")]
pub mod uart;
#[cfg(feature = "usb")]
pub mod usb;

pub use driver::{ConnString, Driver};
pub use mock::{MockDriver, MockProbe, MockTransport};
pub use traits::Transport;
#[cfg(feature = "uart")]
pub use uart::{UartDriver, UartTransport};
#[cfg(feature = "usb")]
pub use usb::{UsbDriver, UsbTransport};
