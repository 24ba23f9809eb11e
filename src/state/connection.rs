//! Connection status state machine type.

use serde::Serialize;

/// Connection lifecycle status.
///
/// Transitions only through the controller: `Disconnected -> Connecting`
/// on a connect command, `Connecting -> Connected` on backend success,
/// `Connecting -> Disconnected` on backend failure, and
/// `Connected -> Disconnected` on a disconnect command. There is no direct
/// jump from `Disconnected` to `Connected`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// No active tunnel.
    #[default]
    Disconnected,
    /// Establish attempt in progress.
    Connecting,
    /// Tunnel established.
    Connected,
}

impl ConnectionStatus {
    /// True while an establish attempt is in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Connecting)
    }

    /// True once the backend has confirmed the tunnel.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Human-readable status label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disconnected() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_busy_only_while_connecting() {
        assert!(!ConnectionStatus::Disconnected.is_busy());
        assert!(ConnectionStatus::Connecting.is_busy());
        assert!(!ConnectionStatus::Connected.is_busy());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConnectionStatus::Connecting.label(), "Connecting...");
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
    }
}
