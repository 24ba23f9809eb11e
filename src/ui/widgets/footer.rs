//! Footer widget with context-aware keybinding hints

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Overlay};
use crate::theme;

/// Render footer hints for the current overlay
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let toggle_hint = if app.controller.status().is_connected() {
        "Disconnect"
    } else {
        "Connect"
    };
    let hints: &[(&str, &str)] = match app.overlay {
        Overlay::None => &[
            ("Enter", toggle_hint),
            ("s", "Servers"),
            ("p", "Protocols"),
            ("q", "Quit"),
        ],
        Overlay::ServerPicker | Overlay::ProtocolPicker => {
            &[("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Close")]
        }
    };

    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(18)]).split(area);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme::BORDER)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme::ACCENT_ALT)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*action, Style::default().fg(theme::TEXT_MUTED)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let branding = Line::from(Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(theme::TEXT_MUTED),
    ));
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
