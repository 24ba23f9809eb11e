//! Application-wide constants and configuration values.

#![allow(dead_code)]
use std::time::Duration;

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// Delay before the stub backend reports a successful connect, in milliseconds.
pub const STUB_CONNECT_DELAY_MS: u64 = 2000;
/// How long a toast notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

// === Path Configuration ===

/// Name of the application config subdirectory.
pub const CONFIG_DIR_NAME: &str = "securevpn";
/// Name of the optional server catalog file inside the config directory.
pub const SERVERS_FILE_NAME: &str = "servers.toml";

// === Activity Log ===

/// Maximum number of retained activity log lines.
pub const MAX_LOG_LINES: usize = 200;

// === Latency Badge Thresholds ===

/// Latency below this is shown as good.
pub const LATENCY_GOOD_MS: u32 = 50;
/// Latency below this is shown as fair; anything above is poor.
pub const LATENCY_FAIR_MS: u32 = 100;

// === UI Messages ===

/// Ready state message shown at startup.
pub const MSG_READY: &str = "SUCCESS: System active. Press [Enter] to connect.";
/// Backend initialization message.
pub const MSG_BACKEND_INIT: &str = "IO: Initializing tunnel backend...";
/// Shown when toggling while a connect is already in flight.
pub const MSG_CONNECT_IN_PROGRESS: &str = "Connection in progress...";
