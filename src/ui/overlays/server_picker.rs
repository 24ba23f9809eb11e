//! Server selection overlay

use ratatui::{
    layout::Constraint,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::app::App;
use crate::theme;
use crate::ui::centered_rect;

/// Render the server picker overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    #[allow(clippy::cast_possible_truncation)]
    let height = (app.controller.catalog().servers().len() as u16 + 4).min(frame.area().height);
    let area = centered_rect(52, height, frame.area());
    frame.render_widget(Clear, area);

    let selected_id = app.controller.selected_server().id.clone();
    let rows: Vec<Row> = app
        .controller
        .catalog()
        .servers()
        .iter()
        .map(|server| {
            let marker = if server.id == selected_id { "●" } else { " " };
            Row::new(vec![
                Cell::from(Span::styled(marker, Style::default().fg(theme::ACCENT))),
                Cell::from(Span::styled(
                    server.country.clone(),
                    Style::default().fg(theme::TEXT_PRIMARY),
                )),
                Cell::from(Span::styled(
                    server.city.clone(),
                    Style::default().fg(theme::TEXT_MUTED),
                )),
                Cell::from(Span::styled(
                    format!("{}ms", server.latency_ms),
                    Style::default().fg(theme::latency_color(server.latency_ms)),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(7),
        ],
    )
    .block(
        Block::default()
            .title(Span::styled(
                " Select Server ",
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_FOCUSED))
            .style(Style::default().bg(theme::BG)),
    )
    .row_highlight_style(
        Style::default()
            .bg(theme::ROW_SELECTED_BG)
            .fg(theme::ROW_SELECTED_FG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(table, area, &mut app.server_table);
}
