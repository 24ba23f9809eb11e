//! Tunnel backend abstraction.
//!
//! The controller never talks to a VPN implementation directly; it calls a
//! [`TunnelBackend`]. Establishing is asynchronous: the backend does its work
//! on its own thread and reports completion over the channel it was handed,
//! tagged with the attempt id the controller supplied. The in-tree
//! [`StubBackend`] simulates a successful connect after a fixed delay; a real
//! `WireGuard`/`OpenVPN`/`IKEv2` backend slots in behind the same trait
//! without touching the state machine.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::error::Error;
use crate::state::{Protocol, Server};

/// Completion events a backend reports for an establish attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TunnelEvent {
    /// The tunnel for the given attempt is up.
    Established {
        /// Attempt id passed to `establish`.
        attempt: u64,
    },
    /// The establish attempt failed; the tunnel is not up.
    EstablishFailed {
        /// Attempt id passed to `establish`.
        attempt: u64,
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Capability to establish and tear down a tunnel.
pub trait TunnelBackend: Send {
    /// Begins establishing a tunnel to `server` using `protocol`.
    ///
    /// Must not block: completion (success or failure) is reported on
    /// `events`, carrying `attempt` so the controller can discard stale
    /// results. Implementations must eventually send exactly one event per
    /// call, bounding slow connects with a timeout of their choosing.
    fn establish(
        &mut self,
        attempt: u64,
        server: &Server,
        protocol: Protocol,
        events: Sender<TunnelEvent>,
    );

    /// Tears down the active tunnel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] if the tunnel could not be torn down
    /// cleanly.
    fn teardown(&mut self) -> Result<(), Error>;
}

/// Fixed-delay always-succeeds backend.
///
/// Stands in for a real VPN implementation: every establish reports success
/// after the configured delay, teardown is immediate. Kept in-tree for the
/// default app and for tests.
pub struct StubBackend {
    delay: Duration,
}

impl StubBackend {
    /// Creates a stub that reports success after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl TunnelBackend for StubBackend {
    fn establish(
        &mut self,
        attempt: u64,
        _server: &Server,
        _protocol: Protocol,
        events: Sender<TunnelEvent>,
    ) {
        let delay = self.delay;
        thread::spawn(move || {
            thread::sleep(delay);
            // Receiver may be gone if the controller was dropped mid-connect.
            let _ = events.send(TunnelEvent::Established { attempt });
        });
    }

    fn teardown(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Instant;

    #[test]
    fn test_stub_reports_success_after_delay() {
        let mut backend = StubBackend::new(Duration::from_millis(50));
        let (tx, rx) = mpsc::channel();
        let server = Server::new("1", "United States", "New York", 45);

        let started = Instant::now();
        backend.establish(7, &server, Protocol::WireGuard, tx);

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(event, TunnelEvent::Established { attempt: 7 });
    }

    #[test]
    fn test_stub_teardown_succeeds() {
        let mut backend = StubBackend::new(Duration::ZERO);
        assert!(backend.teardown().is_ok());
    }

    #[test]
    fn test_stub_survives_dropped_receiver() {
        let mut backend = StubBackend::new(Duration::ZERO);
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let server = Server::new("1", "United States", "New York", 45);
        backend.establish(1, &server, Protocol::OpenVPN, tx);
        // Worker thread must not panic the test process.
        thread::sleep(Duration::from_millis(20));
    }
}
