//! Timeout helpers used across the crate.
//!
//! Polling budgets on PN53x chips are expressed in periods of 150 ms; these
//! helpers turn a poll count and period into host-side timeouts.

use std::time::Duration;

use crate::constants::{AUTO_POLL_SLACK_MS, POLL_PERIOD_UNIT_MS};

/// Default read timeout in milliseconds used by transports when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Time one passive activation may take: `period` units of 150 ms.
pub fn period_timeout_ms(period: u8) -> u64 {
    u64::from(period) * POLL_PERIOD_UNIT_MS
}

/// Host-side timeout for an InAutoPoll command polling `targets` target
/// types `poll_nr` times with the given period.
pub fn auto_poll_timeout_ms(targets: usize, poll_nr: u8, period: u8) -> u64 {
    targets as u64 * u64::from(poll_nr) * period_timeout_ms(period) + AUTO_POLL_SLACK_MS
}
