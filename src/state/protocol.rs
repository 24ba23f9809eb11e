//! Tunneling protocol types.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported tunneling protocols.
///
/// Closed enumeration: there is no dynamic protocol registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// `WireGuard` protocol.
    #[default]
    WireGuard,
    /// `OpenVPN` protocol.
    OpenVPN,
    /// `IKEv2` protocol.
    IKEv2,
}

impl Protocol {
    /// All supported protocols, in display order.
    pub const ALL: [Protocol; 3] = [Protocol::WireGuard, Protocol::OpenVPN, Protocol::IKEv2];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WireGuard => "WireGuard",
            Self::OpenVPN => "OpenVPN",
            Self::IKEv2 => "IKEv2",
        }
    }

    /// Short human description shown next to the label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::WireGuard => "Fast and modern",
            Self::OpenVPN => "Reliable and secure",
            Self::IKEv2 => "Stable on mobile",
        }
    }

    /// Cycle to next protocol: `WireGuard` → `OpenVPN` → `IKEv2` → `WireGuard`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::WireGuard => Self::OpenVPN,
            Self::OpenVPN => Self::IKEv2,
            Self::IKEv2 => Self::WireGuard,
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wireguard" => Ok(Self::WireGuard),
            "openvpn" => Ok(Self::OpenVPN),
            "ikev2" => Ok(Self::IKEv2),
            _ => Err(Error::UnknownProtocol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_fixed_size_three() {
        assert_eq!(Protocol::ALL.len(), 3);
    }

    #[test]
    fn test_default_is_wireguard() {
        assert_eq!(Protocol::default(), Protocol::WireGuard);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Protocol::WireGuard.next(), Protocol::OpenVPN);
        assert_eq!(Protocol::OpenVPN.next(), Protocol::IKEv2);
        assert_eq!(Protocol::IKEv2.next(), Protocol::WireGuard);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("wireguard".parse::<Protocol>().unwrap(), Protocol::WireGuard);
        assert_eq!("OpenVPN".parse::<Protocol>().unwrap(), Protocol::OpenVPN);
        assert_eq!("IKEV2".parse::<Protocol>().unwrap(), Protocol::IKEv2);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "pptp".parse::<Protocol>().unwrap_err();
        assert_eq!(err, Error::UnknownProtocol("pptp".to_string()));
    }
}
