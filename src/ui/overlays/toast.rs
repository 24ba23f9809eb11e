//! Toast notification overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::state::ToastType;
use crate::theme;

/// Render toast notification at the bottom center of the screen
pub fn render(frame: &mut Frame, app: &App) {
    let Some(ref toast) = app.toast else {
        return;
    };

    let area = frame.area();
    let width = (area.width / 2).clamp(24, 50);
    let inner_width = width.saturating_sub(2) as usize;
    let height = wrapped_line_count(&toast.message, inner_width) + 2;

    let toast_area = Rect {
        x: (area.width / 2).saturating_sub(width / 2),
        y: area.height.saturating_sub(height + 2),
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, toast_area);

    let (title, color) = match toast.toast_type {
        ToastType::Info => (" INFO ", theme::ACCENT_ALT),
        ToastType::Success => (" SUCCESS ", theme::SUCCESS),
        ToastType::Error => (" ERROR ", theme::ERROR),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme::BG))
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(toast.message.clone())
        .block(block)
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, toast_area);
}

/// Lines the message occupies when wrapped to `inner_width` columns.
/// Counts characters rather than bytes so multi-byte text does not
/// inflate the estimate.
fn wrapped_line_count(message: &str, inner_width: usize) -> u16 {
    if inner_width == 0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation)]
    let lines = message.chars().count().max(1).div_ceil(inner_width) as u16;
    lines
}
