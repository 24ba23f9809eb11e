//! TUI application state and input handling.
//!
//! [`App`] owns the [`ConnectionController`] and the presentation state
//! around it (overlays, activity log, toasts). It only ever talks to the
//! controller through its four-command surface: select server, select
//! protocol, toggle connection, snapshot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::{ListState, TableState};
use std::time::Instant;

use crate::constants;
use crate::core::controller::{ConnectionController, ControllerEvent};
use crate::state::{ConnectionStatus, Protocol, Toast, ToastType};

/// Modal overlay currently on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Plain dashboard, no overlay.
    #[default]
    None,
    /// Server selection list.
    ServerPicker,
    /// Protocol selection list.
    ProtocolPicker,
}

/// Main application state container.
pub struct App {
    /// Flag indicating the application should exit.
    pub should_quit: bool,
    /// The connection state machine.
    pub controller: ConnectionController,
    /// Active modal overlay.
    pub overlay: Overlay,
    /// Row selection for the server picker.
    pub server_table: TableState,
    /// Row selection for the protocol picker.
    pub protocol_list: ListState,
    /// Activity log lines, oldest first.
    pub logs: Vec<String>,
    /// Current toast notification, if any.
    pub toast: Option<Toast>,
    /// When the current session was established.
    pub session_start: Option<Instant>,
    /// Last known terminal dimensions.
    pub terminal_size: (u16, u16),
    started: Instant,
}

impl App {
    /// Creates the app around a controller and logs the boot sequence.
    #[must_use]
    pub fn new(controller: ConnectionController) -> Self {
        let mut app = Self {
            should_quit: false,
            controller,
            overlay: Overlay::None,
            server_table: TableState::default(),
            protocol_list: ListState::default(),
            logs: Vec::new(),
            toast: None,
            session_start: None,
            terminal_size: (80, 24),
            started: Instant::now(),
        };

        app.server_table.select(Some(0));
        app.protocol_list.select(Some(0));

        app.log(&format!(
            "INIT: {} v{} starting...",
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        app.log(constants::MSG_BACKEND_INIT);
        app.log(constants::MSG_READY);

        app
    }

    /// Append a line to the activity log, stamped with time since launch.
    pub fn log(&mut self, message: &str) {
        let elapsed = self.started.elapsed().as_secs();
        self.logs
            .push(format!("[{:02}:{:02}] {message}", elapsed / 60, elapsed % 60));
        if self.logs.len() > constants::MAX_LOG_LINES {
            self.logs.remove(0);
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global: Ctrl-C always quits.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.overlay {
            Overlay::None => self.handle_dashboard_keys(key),
            Overlay::ServerPicker => self.handle_server_picker_keys(key),
            Overlay::ProtocolPicker => self.handle_protocol_picker_keys(key),
        }
    }

    fn handle_dashboard_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char(' ') => self.toggle(),
            KeyCode::Char('s') => {
                let current = self
                    .controller
                    .catalog()
                    .position(&self.controller.selected_server().id)
                    .unwrap_or(0);
                self.server_table.select(Some(current));
                self.overlay = Overlay::ServerPicker;
            }
            KeyCode::Char('p') => {
                let current = Protocol::ALL
                    .iter()
                    .position(|p| *p == self.controller.selected_protocol())
                    .unwrap_or(0);
                self.protocol_list.select(Some(current));
                self.overlay = Overlay::ProtocolPicker;
            }
            _ => {}
        }
    }

    fn handle_server_picker_keys(&mut self, key: KeyEvent) {
        let len = self.controller.catalog().servers().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => {
                self.overlay = Overlay::None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Self::select_previous(&mut self.server_table, len);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::select_next(&mut self.server_table, len);
            }
            KeyCode::Enter => {
                if let Some(index) = self.server_table.selected() {
                    let id = self.controller.catalog().servers()[index].id.clone();
                    match self.controller.select_server(&id) {
                        Ok(()) => {
                            let server = self.controller.selected_server().clone();
                            self.log(&format!("SELECT: Server '{server}' ({}ms)", server.latency_ms));
                        }
                        Err(e) => self.show_toast(&e.to_string(), ToastType::Error),
                    }
                }
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn handle_protocol_picker_keys(&mut self, key: KeyEvent) {
        let len = Protocol::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('q') => {
                self.overlay = Overlay::None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Self::select_previous(&mut self.protocol_list, len);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::select_next(&mut self.protocol_list, len);
            }
            KeyCode::Enter => {
                if let Some(index) = self.protocol_list.selected() {
                    let protocol = Protocol::ALL[index];
                    self.controller.select_protocol(protocol);
                    self.log(&format!("SELECT: Protocol {protocol}"));
                }
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    /// Connect/disconnect toggle with user feedback.
    fn toggle(&mut self) {
        if self.controller.status().is_busy() {
            self.show_toast(constants::MSG_CONNECT_IN_PROGRESS, ToastType::Info);
            return;
        }
        if self.controller.status() == ConnectionStatus::Connected {
            let server = self.controller.selected_server().clone();
            let result = self.controller.toggle_connection();
            self.session_start = None;
            match result {
                Ok(()) => {
                    self.log(&format!("STATUS: Disconnected from '{server}'"));
                    self.show_toast("Disconnected", ToastType::Info);
                }
                Err(e) => {
                    self.log(&format!("ERROR: {e}"));
                    self.show_toast(&e.to_string(), ToastType::Error);
                }
            }
        } else {
            let server = self.controller.selected_server().clone();
            let protocol = self.controller.selected_protocol();
            match self.controller.toggle_connection() {
                Ok(()) => {
                    self.log(&format!("STATUS: Connecting to '{server}' via {protocol}..."));
                }
                Err(e) => self.show_toast(&e.to_string(), ToastType::Error),
            }
        }
    }

    /// Called on each tick: drains controller transitions and expires toasts.
    pub fn on_tick(&mut self) {
        for event in self.controller.poll() {
            match event {
                ControllerEvent::Established(snapshot) => {
                    self.session_start = Some(Instant::now());
                    self.log(&format!(
                        "STATUS: Connection established to '{}' via {}",
                        snapshot.selected_server, snapshot.selected_protocol
                    ));
                    self.show_toast(
                        &format!("Connected to {}", snapshot.selected_server.country),
                        ToastType::Success,
                    );
                }
                ControllerEvent::EstablishFailed(reason) => {
                    self.log(&format!("ERROR: Connection failed: {reason}"));
                    self.show_toast(&format!("Connection failed: {reason}"), ToastType::Error);
                }
            }
        }

        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.expires {
                self.toast = None;
            }
        }
    }

    /// Called when the terminal is resized.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Show a toast notification and log it.
    fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.log(message);
        self.toast = Some(Toast {
            message: message.to_string(),
            toast_type,
            expires: Instant::now() + constants::TOAST_DURATION,
        });
    }

    fn select_next<S: Selectable>(state: &mut S, len: usize) {
        let next = match state.current() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        state.set(next);
    }

    fn select_previous<S: Selectable>(state: &mut S, len: usize) {
        let previous = match state.current() {
            Some(0) | None => len.saturating_sub(1),
            Some(i) => i - 1,
        };
        state.set(previous);
    }
}

/// Shared navigation over ratatui's list and table selection states.
trait Selectable {
    fn current(&self) -> Option<usize>;
    fn set(&mut self, index: usize);
}

impl Selectable for TableState {
    fn current(&self) -> Option<usize> {
        self.selected()
    }
    fn set(&mut self, index: usize) {
        self.select(Some(index));
    }
}

impl Selectable for ListState {
    fn current(&self) -> Option<usize> {
        self.selected()
    }
    fn set(&mut self, index: usize) {
        self.select(Some(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ServerCatalog;
    use crate::tunnel::StubBackend;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let controller = ConnectionController::new(
            ServerCatalog::builtin(),
            Box::new(StubBackend::new(Duration::ZERO)),
        );
        App::new(controller)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_starts_connecting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.status(), ConnectionStatus::Connecting);
    }

    #[test]
    fn test_toggle_while_connecting_shows_busy_toast() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.status(), ConnectionStatus::Connecting);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, constants::MSG_CONNECT_IN_PROGRESS);
        assert_eq!(toast.toast_type, ToastType::Info);
    }

    #[test]
    fn test_server_picker_selects_server() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.overlay, Overlay::ServerPicker);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.controller.selected_server().id, "3");
    }

    #[test]
    fn test_server_picker_navigation_wraps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Up));
        let last = app.controller.catalog().servers().len() - 1;
        assert_eq!(app.server_table.selected(), Some(last));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.server_table.selected(), Some(0));
    }

    #[test]
    fn test_protocol_picker_selects_protocol() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.overlay, Overlay::ProtocolPicker);

        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.controller.selected_protocol(), Protocol::OpenVPN);
    }

    #[test]
    fn test_picker_opens_on_current_selection() {
        let mut app = app();
        app.controller.select_server("5").unwrap();
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.server_table.selected(), Some(4));
    }
}
