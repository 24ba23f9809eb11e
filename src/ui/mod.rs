//! UI rendering module

mod dashboard;
mod overlays;
mod widgets;

use crate::app::{App, Overlay};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Main render function - dashboard plus any active overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    dashboard::render(frame, app);

    match app.overlay {
        Overlay::ServerPicker => overlays::server_picker::render(frame, app),
        Overlay::ProtocolPicker => overlays::protocol_picker::render(frame, app),
        Overlay::None => {}
    }

    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}

/// Rect of the given size centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
