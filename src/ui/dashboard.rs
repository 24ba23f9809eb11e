//! Main dashboard view: status header, connection card, activity log.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::ConnectionStatus;
use crate::theme;
use crate::ui::widgets;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG)),
        area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, chunks[0]);

    let body = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_connection(frame, app, body[0]);
    render_logs(frame, app, body[1]);

    widgets::footer::render(frame, app, chunks[2]);
}

fn status_color(status: ConnectionStatus) -> ratatui::style::Color {
    match status {
        ConnectionStatus::Connected => theme::SUCCESS,
        ConnectionStatus::Connecting => theme::WARNING,
        ConnectionStatus::Disconnected => theme::TEXT_MUTED,
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.controller.status();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", crate::constants::APP_NAME),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            status.label(),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));
    frame.render_widget(
        Paragraph::new(title).block(block).alignment(Alignment::Left),
        area,
    );
}

fn render_connection(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.controller.snapshot();
    let server = &snapshot.selected_server;
    let protocol = snapshot.selected_protocol;

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Server    ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(
                server.country.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", server.city),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Latency   ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(
                format!("{}ms", server.latency_ms),
                Style::default().fg(theme::latency_color(server.latency_ms)),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Protocol  ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(protocol.label(), Style::default().fg(theme::ACCENT_ALT)),
            Span::styled(
                format!("  {}", protocol.description()),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
        Line::default(),
    ];

    match snapshot.status {
        ConnectionStatus::Connected => {
            let uptime = app.session_start.map_or(0, |s| s.elapsed().as_secs());
            lines.push(Line::from(vec![
                Span::styled("  Session   ", Style::default().fg(theme::TEXT_MUTED)),
                Span::styled(
                    format!("{:02}:{:02}:{:02}", uptime / 3600, (uptime / 60) % 60, uptime % 60),
                    Style::default().fg(theme::SUCCESS),
                ),
            ]));
        }
        ConnectionStatus::Connecting => {
            lines.push(Line::from(Span::styled(
                "  Establishing tunnel...",
                Style::default().fg(theme::WARNING),
            )));
        }
        ConnectionStatus::Disconnected => {
            lines.push(Line::from(Span::styled(
                "  Press [Enter] to connect",
                Style::default().fg(theme::TEXT_MUTED),
            )));
        }
    }

    let block = Block::default()
        .title(Span::styled(
            " Connection ",
            Style::default().fg(theme::TEXT_PRIMARY),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " Activity ",
            Style::default().fg(theme::TEXT_PRIMARY),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));

    // Show the newest lines that fit.
    let visible = block.inner(area).height as usize;
    let skip = app.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = app.logs[skip..]
        .iter()
        .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(theme::TEXT_MUTED))))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
