//! Static server catalog.

use crate::error::Error;
use crate::state::Server;

/// Read-only, ordered list of known relay servers.
///
/// Loaded once at startup and never mutated afterwards. Iteration order is
/// insertion order.
#[derive(Clone, Debug)]
pub struct ServerCatalog {
    servers: Vec<Server>,
}

impl ServerCatalog {
    /// Builds a catalog from a server list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCatalog`] if `servers` is empty. The controller's
    /// selected server defaults to the first entry, so an empty catalog is
    /// rejected up front rather than at first use.
    pub fn new(servers: Vec<Server>) -> Result<Self, Error> {
        if servers.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { servers })
    }

    /// The built-in default catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            servers: vec![
                Server::new("1", "United States", "New York", 45),
                Server::new("2", "Germany", "Berlin", 32),
                Server::new("3", "United Kingdom", "London", 28),
                Server::new("4", "Japan", "Tokyo", 120),
                Server::new("5", "Singapore", "Singapore", 85),
                Server::new("6", "Canada", "Toronto", 55),
                Server::new("7", "France", "Paris", 38),
                Server::new("8", "Netherlands", "Amsterdam", 25),
            ],
        }
    }

    /// All servers, in insertion order.
    #[must_use]
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Looks up a server by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServerNotFound`] if no server has that id.
    pub fn get(&self, id: &str) -> Result<&Server, Error> {
        self.servers
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::ServerNotFound(id.to_string()))
    }

    /// Index of the server with the given id, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.servers.iter().position(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ServerCatalog {
        ServerCatalog::new(vec![
            Server::new("1", "United States", "New York", 45),
            Server::new("3", "United Kingdom", "London", 28),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(ServerCatalog::new(Vec::new()).unwrap_err(), Error::EmptyCatalog);
    }

    #[test]
    fn test_order_is_stable() {
        let catalog = small_catalog();
        let ids: Vec<&str> = catalog.servers().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_get_known_id() {
        let catalog = small_catalog();
        assert_eq!(catalog.get("3").unwrap().latency_ms, 28);
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = small_catalog();
        assert_eq!(
            catalog.get("99").unwrap_err(),
            Error::ServerNotFound("99".to_string())
        );
    }

    #[test]
    fn test_builtin_catalog_nonempty_with_unique_ids() {
        let catalog = ServerCatalog::builtin();
        assert!(!catalog.servers().is_empty());
        for server in catalog.servers() {
            assert_eq!(catalog.get(&server.id).unwrap(), server);
        }
    }
}
