//! Protocol selection overlay

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::state::Protocol;
use crate::theme;
use crate::ui::centered_rect;

/// Render the protocol picker overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let selected = app.controller.selected_protocol();
    let items: Vec<ListItem> = Protocol::ALL
        .iter()
        .map(|protocol| {
            let marker = if *protocol == selected { "●" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{marker} "),
                    Style::default().fg(theme::ACCENT),
                ),
                Span::styled(
                    format!("{:<10}", protocol.label()),
                    Style::default().fg(theme::TEXT_PRIMARY),
                ),
                Span::styled(
                    protocol.description(),
                    Style::default().fg(theme::TEXT_MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    " Select Protocol ",
                    Style::default()
                        .fg(theme::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_FOCUSED))
                .style(Style::default().bg(theme::BG)),
        )
        .highlight_style(
            Style::default()
                .bg(theme::ROW_SELECTED_BG)
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut app.protocol_list);
}
