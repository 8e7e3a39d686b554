// nfcgate/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoints of a reader and the interface that owns them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub bulk_in: u8,
    pub bulk_out: u8,
    pub interface: u8,
}

/// Inspect the active configuration and return the first bulk IN/OUT pair
/// found on a single interface.
pub fn find_endpoints<C: UsbContext>(device: &Device<C>) -> Option<Endpoints> {
    let config = device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
        .ok()?;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            let mut bulk_in = None;
            let mut bulk_out = None;
            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match endpoint_desc.direction() {
                    Direction::In if bulk_in.is_none() => bulk_in = Some(endpoint_desc.address()),
                    Direction::Out if bulk_out.is_none() => {
                        bulk_out = Some(endpoint_desc.address())
                    }
                    _ => {}
                }
            }
            if let (Some(bulk_in), Some(bulk_out)) = (bulk_in, bulk_out) {
                return Some(Endpoints {
                    bulk_in,
                    bulk_out,
                    interface: interface_desc.interface_number(),
                });
            }
        }
    }
    None
}
