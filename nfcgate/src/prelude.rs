// nfcgate/src/prelude.rs

pub use crate::config::{DriverOptions, NotifierConfig, ReaderConfig};
pub use crate::device::{Chip, ConnString, Context, Device, Idle, Initiator};
pub use crate::identify::{extract, identify};
pub use crate::notifier::{DoorState, Notifier};
pub use crate::poller::{PollOutcome, PollSettings, ProbeTable, poll_once};
pub use crate::session::{Detection, ReaderSession};
pub use crate::target::Target;
pub use crate::{Error, Modulation, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
