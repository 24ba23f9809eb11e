//! Relay server types.

use serde::{Deserialize, Serialize};

/// A relay server the client may route traffic through.
///
/// Immutable once listed; the catalog is static for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Unique server identifier.
    pub id: String,
    /// Country display label.
    pub country: String,
    /// City display label.
    pub city: String,
    /// Measured or last-known ping in milliseconds.
    pub latency_ms: u32,
}

impl Server {
    /// Convenience constructor for the built-in catalog and tests.
    #[must_use]
    pub fn new(id: &str, country: &str, city: &str, latency_ms: u32) -> Self {
        Self {
            id: id.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            latency_ms,
        }
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.country, self.city)
    }
}
