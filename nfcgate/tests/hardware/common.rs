#![cfg(feature = "usb")]

//! Helpers for tests against a real reader. A missing reader is not a
//! failure so the tests stay runnable on machines without one.

use nfcgate::{Context, Error, ReaderSession, Result};

/// Run `f` with an initiator session on the first USB reader, or return
/// `Ok(None)` when none is attached.
pub fn with_session<T>(f: impl FnOnce(&mut ReaderSession<'_>) -> Result<T>) -> Result<Option<T>> {
    let context = Context::init()?;
    match ReaderSession::open(&context, None) {
        Ok(mut session) => f(&mut session).map(Some),
        Err(Error::DeviceUnavailable) => Ok(None),
        Err(e) => Err(e),
    }
}
