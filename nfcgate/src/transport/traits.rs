// nfcgate/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/device logic.
///
/// Implementations move whole PN53x frames: `send` writes one encoded frame,
/// `receive` returns the bytes of one frame (possibly with leading noise).
pub trait Transport {
    /// Send raw bytes to the device
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive raw bytes from the device with a timeout in milliseconds
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Perform a transport-level reset (drop buffered input)
    fn reset(&mut self) -> Result<()>;

    /// Bring the chip out of power-down before the first command. Only
    /// serial links need this.
    fn wakeup(&mut self) -> Result<()> {
        Ok(())
    }
}
