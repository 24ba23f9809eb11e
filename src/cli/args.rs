//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::constants;

/// SecureVPN - Terminal VPN Connection Manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute (runs the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// UI refresh rate in milliseconds
    #[arg(long, env = "SECUREVPN_TICK_RATE", default_value_t = constants::DEFAULT_TICK_RATE)]
    pub tick_rate: u64,

    /// Simulated connect delay of the stub backend in milliseconds
    #[arg(long, env = "SECUREVPN_CONNECT_DELAY_MS", default_value_t = constants::STUB_CONNECT_DELAY_MS)]
    pub connect_delay: u64,

    /// Initially selected server id (defaults to the catalog's first entry)
    #[arg(long)]
    pub server: Option<String>,

    /// Initially selected protocol: wireguard, openvpn or ikev2
    #[arg(long)]
    pub protocol: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the server catalog
    Servers {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the supported tunneling protocols
    Protocols {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
