//! Application state types.

mod connection;
mod protocol;
mod server;

pub use connection::ConnectionStatus;
pub use protocol::Protocol;
pub use server::Server;

use std::time::Instant;

/// Toast notification severity, mapped to a color and title by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    /// Neutral information.
    Info,
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// Toast notification for temporary messages.
#[derive(Clone)]
pub struct Toast {
    /// Message to display.
    pub message: String,
    /// Severity of the notification.
    pub toast_type: ToastType,
    /// When the toast should disappear.
    pub expires: Instant,
}
