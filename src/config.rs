//! Server catalog configuration loading.
//!
//! The catalog is compiled-in by default. A `servers.toml` in the user config
//! directory overrides it; the file is read once at startup and the catalog
//! stays immutable afterwards.
//!
//! ```toml
//! [[servers]]
//! id = "1"
//! country = "United States"
//! city = "New York"
//! latency_ms = 45
//! ```

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::constants;
use crate::core::catalog::ServerCatalog;
use crate::state::Server;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    servers: Vec<Server>,
}

/// Path of the optional catalog override file.
#[must_use]
pub fn catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::SERVERS_FILE_NAME)
    })
}

/// Loads the server catalog.
///
/// Uses the built-in defaults unless a catalog file exists; a present but
/// invalid file is an error rather than a silent fallback.
///
/// # Errors
///
/// Returns an error if the catalog file exists but cannot be read, parsed,
/// or lists no servers.
pub fn load_catalog() -> Result<ServerCatalog> {
    match catalog_path() {
        Some(path) if path.is_file() => {
            let content = fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            parse_catalog(&content)
                .wrap_err_with(|| format!("invalid server catalog in {}", path.display()))
        }
        _ => Ok(ServerCatalog::builtin()),
    }
}

fn parse_catalog(content: &str) -> Result<ServerCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(ServerCatalog::new(file.servers)?)
}
