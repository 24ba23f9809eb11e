//! SecureVPN - terminal VPN connection manager.
//!
//! Tracks connection lifecycle state, holds a catalog of relay servers with
//! latency metrics, and lets the user pick a server and tunneling protocol
//! before connecting. Tunnel establishment itself sits behind a pluggable
//! backend; the bundled one simulates a connect after a fixed delay.

mod app;
mod cli;
mod config;
mod constants;
mod core;
mod error;
mod event;
mod state;
mod theme;
mod tunnel;
mod ui;

use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::app::App;
use crate::cli::args::{Args, Commands};
use crate::core::controller::ConnectionController;
use crate::event::{Event, EventHandler};
use crate::tunnel::StubBackend;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    match args.command {
        Some(Commands::Servers { json }) => cli::commands::list_servers(json),
        Some(Commands::Protocols { json }) => cli::commands::list_protocols(json),
        None => run(&args),
    }
}

/// Set up the controller and run the TUI until quit.
fn run(args: &Args) -> Result<()> {
    let catalog = config::load_catalog()?;
    if let Some(id) = &args.server {
        catalog
            .get(id)
            .wrap_err("unknown --server id; run `securevpn servers` to list ids")?;
    }

    let backend = StubBackend::new(Duration::from_millis(args.connect_delay));
    let mut controller = ConnectionController::new(catalog, Box::new(backend));
    if let Some(id) = &args.server {
        controller.select_server(id)?;
    }
    if let Some(name) = &args.protocol {
        controller
            .select_protocol_by_name(name)
            .wrap_err("run `securevpn protocols` for the supported set")?;
    }
    let mut app = App::new(controller);

    let events = EventHandler::new(args.tick_rate);
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app, &events);
    ratatui::restore();
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(width, height) => app.on_resize(width, height),
            Event::Tick => app.on_tick(),
        }
    }
    Ok(())
}
