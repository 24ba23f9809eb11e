//! Connection controller state machine.
//!
//! Owns the current [`ConnectionStatus`], the selected server and protocol,
//! and drives transitions by invoking a pluggable [`TunnelBackend`]. All
//! commands are handled on a single thread; the backend reports establish
//! completions over a channel that [`ConnectionController::poll`] drains, so
//! a `Connected` snapshot is only ever published after the backend has
//! confirmed it.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::catalog::ServerCatalog;
use crate::error::Error;
use crate::state::{ConnectionStatus, Protocol, Server};
use crate::tunnel::{TunnelBackend, TunnelEvent};

/// Immutable read of controller state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    /// Current lifecycle status.
    pub status: ConnectionStatus,
    /// The server a connect would target (or the one connected to).
    pub selected_server: Server,
    /// The protocol a connect would use.
    pub selected_protocol: Protocol,
}

/// State transition events produced by [`ConnectionController::poll`],
/// published to observers (UI, logs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// An establish attempt completed; status is now `Connected`.
    Established(Snapshot),
    /// An establish attempt failed; status reverted to `Disconnected`.
    EstablishFailed(String),
}

/// The connection state machine.
pub struct ConnectionController {
    catalog: ServerCatalog,
    backend: Box<dyn TunnelBackend>,
    status: ConnectionStatus,
    selected: usize,
    protocol: Protocol,
    // Id of the most recent establish attempt. Completions tagged with an
    // older id are stale and must not transition the machine.
    attempt: u64,
    events_tx: Sender<TunnelEvent>,
    events_rx: Receiver<TunnelEvent>,
}

impl ConnectionController {
    /// Creates a controller in the `Disconnected` state with the catalog's
    /// first server and `WireGuard` selected. A [`ServerCatalog`] is never
    /// empty, so the default selection always exists.
    #[must_use]
    pub fn new(catalog: ServerCatalog, backend: Box<dyn TunnelBackend>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            catalog,
            backend,
            status: ConnectionStatus::Disconnected,
            selected: 0,
            protocol: Protocol::default(),
            attempt: 0,
            events_tx,
            events_rx,
        }
    }

    /// The catalog this controller selects from.
    #[must_use]
    pub fn catalog(&self) -> &ServerCatalog {
        &self.catalog
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Currently selected server.
    #[must_use]
    pub fn selected_server(&self) -> &Server {
        // Invariant: `selected` always indexes into the catalog.
        &self.catalog.servers()[self.selected]
    }

    /// Currently selected protocol.
    #[must_use]
    pub fn selected_protocol(&self) -> Protocol {
        self.protocol
    }

    /// Selects the catalog server with the given id.
    ///
    /// Permitted in any status, including while a connect is in flight; a
    /// pending establish keeps targeting the selection captured when it
    /// started.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServerNotFound`] (leaving the selection unchanged)
    /// if no such server exists.
    pub fn select_server(&mut self, id: &str) -> Result<(), Error> {
        match self.catalog.position(id) {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => Err(Error::ServerNotFound(id.to_string())),
        }
    }

    /// Selects a tunneling protocol. Total over the enum; never touches status.
    pub fn select_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
    }

    /// Selects a protocol by name (CLI/config input).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProtocol`] for names outside the registry.
    pub fn select_protocol_by_name(&mut self, name: &str) -> Result<(), Error> {
        self.protocol = name.parse()?;
        Ok(())
    }

    /// The single user-facing connect/disconnect command.
    ///
    /// From `Disconnected`: transitions to `Connecting` synchronously, then
    /// starts an establish against the selection captured now. From
    /// `Connected`: tears the tunnel down and transitions to `Disconnected`.
    /// While `Connecting`: no-op; an in-flight establish is not cancellable
    /// through this command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] if teardown fails. The status still
    /// transitions to `Disconnected`, matching the single-toggle contract.
    pub fn toggle_connection(&mut self) -> Result<(), Error> {
        match self.status {
            ConnectionStatus::Disconnected => {
                self.status = ConnectionStatus::Connecting;
                self.attempt += 1;
                let server = self.selected_server().clone();
                self.backend
                    .establish(self.attempt, &server, self.protocol, self.events_tx.clone());
                Ok(())
            }
            ConnectionStatus::Connecting => Ok(()),
            ConnectionStatus::Connected => {
                let result = self.backend.teardown();
                self.status = ConnectionStatus::Disconnected;
                result
            }
        }
    }

    /// Drains backend completion events and performs the resulting
    /// transitions, returning the events to publish to observers.
    ///
    /// Stale completions (an attempt id other than the current one, or a
    /// completion arriving when the machine is no longer `Connecting`) are
    /// discarded.
    pub fn poll(&mut self) -> Vec<ControllerEvent> {
        let mut published = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                TunnelEvent::Established { attempt } => {
                    if attempt == self.attempt && self.status == ConnectionStatus::Connecting {
                        self.status = ConnectionStatus::Connected;
                        published.push(ControllerEvent::Established(self.snapshot()));
                    }
                }
                TunnelEvent::EstablishFailed { attempt, reason } => {
                    if attempt == self.attempt && self.status == ConnectionStatus::Connecting {
                        self.status = ConnectionStatus::Disconnected;
                        published.push(ControllerEvent::EstablishFailed(reason));
                    }
                }
            }
        }
        published
    }

    /// Pure read of the current state; no side effects.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            selected_server: self.selected_server().clone(),
            selected_protocol: self.protocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Backend whose establish calls complete only when the test says so.
    #[derive(Clone, Default)]
    struct ManualBackend {
        calls: Arc<Mutex<Vec<EstablishCall>>>,
        teardowns: Arc<Mutex<u32>>,
        fail_teardown: bool,
    }

    struct EstablishCall {
        attempt: u64,
        server: Server,
        protocol: Protocol,
        events: Sender<TunnelEvent>,
    }

    impl ManualBackend {
        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn teardown_count(&self) -> u32 {
            *self.teardowns.lock().unwrap()
        }

        fn captured_target(&self, index: usize) -> (String, Protocol) {
            let calls = self.calls.lock().unwrap();
            (calls[index].server.id.clone(), calls[index].protocol)
        }

        fn complete(&self, index: usize) {
            let calls = self.calls.lock().unwrap();
            let call = &calls[index];
            call.events
                .send(TunnelEvent::Established {
                    attempt: call.attempt,
                })
                .unwrap();
        }

        fn fail(&self, index: usize, reason: &str) {
            let calls = self.calls.lock().unwrap();
            let call = &calls[index];
            call.events
                .send(TunnelEvent::EstablishFailed {
                    attempt: call.attempt,
                    reason: reason.to_string(),
                })
                .unwrap();
        }
    }

    impl TunnelBackend for ManualBackend {
        fn establish(
            &mut self,
            attempt: u64,
            server: &Server,
            protocol: Protocol,
            events: Sender<TunnelEvent>,
        ) {
            self.calls.lock().unwrap().push(EstablishCall {
                attempt,
                server: server.clone(),
                protocol,
                events,
            });
        }

        fn teardown(&mut self) -> Result<(), Error> {
            *self.teardowns.lock().unwrap() += 1;
            if self.fail_teardown {
                Err(Error::Backend("interface busy".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn controller_with(backend: &ManualBackend) -> ConnectionController {
        let catalog = ServerCatalog::new(vec![
            Server::new("1", "United States", "New York", 45),
            Server::new("3", "United Kingdom", "London", 28),
        ])
        .unwrap();
        ConnectionController::new(catalog, Box::new(backend.clone()))
    }

    #[test]
    fn test_defaults_to_first_server_and_wireguard() {
        let backend = ManualBackend::default();
        let controller = controller_with(&backend);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, ConnectionStatus::Disconnected);
        assert_eq!(snapshot.selected_server.id, "1");
        assert_eq!(snapshot.selected_protocol, Protocol::WireGuard);
    }

    #[test]
    fn test_select_server_by_id() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);
        controller.select_server("3").unwrap();
        assert_eq!(controller.snapshot().selected_server.id, "3");
        assert_eq!(controller.snapshot().selected_server.latency_ms, 28);
    }

    #[test]
    fn test_select_unknown_server_leaves_selection_unchanged() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);
        let err = controller.select_server("unknown").unwrap_err();
        assert_eq!(err, Error::ServerNotFound("unknown".to_string()));
        assert_eq!(controller.snapshot().selected_server.id, "1");
    }

    #[test]
    fn test_select_protocol_by_name() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);
        controller.select_protocol_by_name("ikev2").unwrap();
        assert_eq!(controller.selected_protocol(), Protocol::IKEv2);
        assert!(controller.select_protocol_by_name("pptp").is_err());
        assert_eq!(controller.selected_protocol(), Protocol::IKEv2);
    }

    #[test]
    fn test_connect_transitions_through_connecting() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        assert_eq!(controller.status(), ConnectionStatus::Connecting);
        // Busy state is visible before the backend has completed.
        assert!(controller.poll().is_empty());
        assert_eq!(controller.status(), ConnectionStatus::Connecting);

        backend.complete(0);
        let events = controller.poll();
        assert_eq!(controller.status(), ConnectionStatus::Connected);
        assert!(matches!(events.as_slice(), [ControllerEvent::Established(s)]
            if s.status == ConnectionStatus::Connected));
    }

    #[test]
    fn test_toggle_while_connecting_is_noop() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        controller.toggle_connection().unwrap();
        controller.toggle_connection().unwrap();
        assert_eq!(controller.status(), ConnectionStatus::Connecting);
        // No double establish.
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_disconnect_tears_down() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        backend.complete(0);
        controller.poll();
        assert_eq!(controller.status(), ConnectionStatus::Connected);

        controller.toggle_connection().unwrap();
        assert_eq!(controller.status(), ConnectionStatus::Disconnected);
        assert_eq!(backend.teardown_count(), 1);
    }

    #[test]
    fn test_teardown_failure_still_disconnects() {
        let backend = ManualBackend {
            fail_teardown: true,
            ..ManualBackend::default()
        };
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        backend.complete(0);
        controller.poll();

        let err = controller.toggle_connection().unwrap_err();
        assert_eq!(err, Error::Backend("interface busy".to_string()));
        assert_eq!(controller.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_establish_failure_reverts_and_is_observable() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        backend.fail(0, "timeout");
        let events = controller.poll();
        assert_eq!(controller.status(), ConnectionStatus::Disconnected);
        assert_eq!(
            events,
            vec![ControllerEvent::EstablishFailed("timeout".to_string())]
        );

        // Recoverable: a retry starts a fresh attempt.
        controller.toggle_connection().unwrap();
        assert_eq!(controller.status(), ConnectionStatus::Connecting);
        assert_eq!(backend.call_count(), 2);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);

        controller.toggle_connection().unwrap();
        backend.fail(0, "timeout");
        controller.poll();

        controller.toggle_connection().unwrap();
        // The first attempt completes late; it must not transition attempt two.
        backend.complete(0);
        assert!(controller.poll().is_empty());
        assert_eq!(controller.status(), ConnectionStatus::Connecting);

        backend.complete(1);
        controller.poll();
        assert_eq!(controller.status(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_pending_connect_uses_selection_at_call_time() {
        let backend = ManualBackend::default();
        let mut controller = controller_with(&backend);
        controller.select_protocol(Protocol::OpenVPN);

        controller.toggle_connection().unwrap();
        // Changing the selection mid-flight is permitted but does not retarget
        // the pending attempt.
        controller.select_server("3").unwrap();
        controller.select_protocol(Protocol::IKEv2);

        let (server_id, protocol) = backend.captured_target(0);
        assert_eq!(server_id, "1");
        assert_eq!(protocol, Protocol::OpenVPN);

        backend.complete(0);
        controller.poll();
        assert_eq!(controller.status(), ConnectionStatus::Connected);
        // The snapshot reflects the new selection, as the UI observed it.
        assert_eq!(controller.snapshot().selected_server.id, "3");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let backend = ManualBackend::default();
        let controller = controller_with(&backend);
        let json = serde_json::to_value(controller.snapshot()).unwrap();
        assert_eq!(json["status"], "disconnected");
        assert_eq!(json["selected_server"]["id"], "1");
        assert_eq!(json["selected_server"]["latency_ms"], 45);
        assert_eq!(json["selected_protocol"], "wireguard");
    }
}
