//! Crate-wide error types.

/// Errors surfaced by the connection controller and its collaborators.
///
/// None of these are fatal: the controller remains usable after any of them,
/// and `Backend` failures in particular may simply be retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No server with the given id exists in the catalog.
    ServerNotFound(String),
    /// A protocol name could not be parsed into a known protocol.
    UnknownProtocol(String),
    /// The tunnel backend reported a failure during establish or teardown.
    Backend(String),
    /// A server catalog was constructed with no entries.
    EmptyCatalog,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ServerNotFound(id) => write!(f, "unknown server id: {id}"),
            Error::UnknownProtocol(name) => write!(f, "unknown protocol: {name}"),
            Error::Backend(reason) => write!(f, "tunnel backend failure: {reason}"),
            Error::EmptyCatalog => write!(f, "server catalog must contain at least one server"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        assert_eq!(
            Error::ServerNotFound("99".to_string()).to_string(),
            "unknown server id: 99"
        );
        assert_eq!(
            Error::Backend("timeout".to_string()).to_string(),
            "tunnel backend failure: timeout"
        );
    }
}
