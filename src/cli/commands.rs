//! CLI command handlers.

use color_eyre::Result;

use crate::config;
use crate::state::Protocol;

/// Print the server catalog to stdout.
///
/// # Errors
///
/// Returns an error if the catalog file is invalid or serialization fails.
pub fn list_servers(json: bool) -> Result<()> {
    let catalog = config::load_catalog()?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.servers())?);
        return Ok(());
    }

    println!("{:<4} {:<18} {:<12} {:>8}", "ID", "COUNTRY", "CITY", "PING");
    for server in catalog.servers() {
        println!(
            "{:<4} {:<18} {:<12} {:>6}ms",
            server.id, server.country, server.city, server.latency_ms
        );
    }
    Ok(())
}

/// Print the protocol registry to stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn list_protocols(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = Protocol::ALL
            .iter()
            .map(|p| {
                serde_json::json!({
                    "value": p,
                    "label": p.label(),
                    "description": p.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for protocol in Protocol::ALL {
        println!("{:<12} {}", protocol.label(), protocol.description());
    }
    Ok(())
}
