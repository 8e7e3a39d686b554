// nfcgate/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::driver::{ConnString, Driver};
use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug)]
enum MockReply {
    Bytes(Vec<u8>),
    Timeout,
}

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    responses: VecDeque<MockReply>,
    wakeups: usize,
    opened: usize,
    transport_closed: bool,
    driver_released: bool,
}

/// Shared view on a mock link. Tests keep a probe to seed replies and inspect
/// traffic after the transport has been moved into a device.
#[derive(Debug, Clone, Default)]
pub struct MockProbe(Rc<RefCell<MockState>>);

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes for the next `receive`
    pub fn push_response(&self, raw: Vec<u8>) {
        self.0.borrow_mut().responses.push_back(MockReply::Bytes(raw));
    }

    /// Queue a receive that times out even though later replies are queued
    pub fn push_timeout(&self) {
        self.0.borrow_mut().responses.push_back(MockReply::Timeout);
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.0.borrow().sent.clone()
    }

    pub fn pending_responses(&self) -> usize {
        self.0.borrow().responses.len()
    }

    pub fn wakeups(&self) -> usize {
        self.0.borrow().wakeups
    }

    /// How many transports the mock driver handed out
    pub fn open_count(&self) -> usize {
        self.0.borrow().opened
    }

    /// True once the transport has been dropped
    pub fn is_closed(&self) -> bool {
        self.0.borrow().transport_closed
    }

    /// True once the mock driver (and so its context) has been dropped
    pub fn driver_released(&self) -> bool {
        self.0.borrow().driver_released
    }
}

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    probe: MockProbe,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_probe(probe: MockProbe) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> MockProbe {
        self.probe.clone()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.probe.push_response(resp);
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.probe.0.borrow_mut().sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        match self.probe.0.borrow_mut().responses.pop_front() {
            Some(MockReply::Bytes(raw)) => Ok(raw),
            Some(MockReply::Timeout) | None => Err(Error::Timeout),
        }
    }

    fn reset(&mut self) -> Result<()> {
        // Queued responses stay so tests can pre-seed replies before the
        // transport reaches a device.
        self.probe.0.borrow_mut().sent.clear();
        Ok(())
    }

    fn wakeup(&mut self) -> Result<()> {
        self.probe.0.borrow_mut().wakeups += 1;
        Ok(())
    }
}

impl Drop for MockTransport {
    fn drop(&mut self) {
        self.probe.0.borrow_mut().transport_closed = true;
    }
}

/// Driver handing out mock transports that all share one probe.
#[derive(Debug)]
pub struct MockDriver {
    probe: MockProbe,
    available: bool,
}

impl MockDriver {
    pub const NAME: &'static str = "mock";

    pub fn new(probe: MockProbe) -> Self {
        Self {
            probe,
            available: true,
        }
    }

    /// A driver whose device never answers the open
    pub fn unavailable(probe: MockProbe) -> Self {
        Self {
            probe,
            available: false,
        }
    }
}

impl Driver for MockDriver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn scan(&self) -> Result<Vec<ConnString>> {
        if self.available {
            Ok(vec![ConnString::new(Self::NAME, None)])
        } else {
            Ok(Vec::new())
        }
    }

    fn open(&self, _connstring: &ConnString) -> Result<Box<dyn Transport>> {
        if !self.available {
            return Err(Error::DeviceUnavailable);
        }
        self.probe.0.borrow_mut().opened += 1;
        Ok(Box::new(MockTransport::with_probe(self.probe.clone())))
    }
}

impl Drop for MockDriver {
    fn drop(&mut self) {
        self.probe.0.borrow_mut().driver_released = true;
    }
}
