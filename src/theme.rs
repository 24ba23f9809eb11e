//! Midnight color theme definitions.
//!
//! Dark palette with a violet primary accent, matching the app's
//! shield-and-glow visual identity.

#![allow(dead_code)]
use ratatui::style::Color;

use crate::constants;

// === Base ===

/// Main background color.
pub const BG: Color = Color::Rgb(16, 18, 27);
/// Primary text color.
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 230, 240);
/// Secondary/muted text color.
pub const TEXT_MUTED: Color = Color::Rgb(110, 118, 140);

// === Accents ===

/// Primary accent - violet.
pub const ACCENT: Color = Color::Rgb(124, 108, 255);
/// Secondary accent - teal.
pub const ACCENT_ALT: Color = Color::Rgb(92, 200, 220);

// === Status ===

/// Connected / success.
pub const SUCCESS: Color = Color::Rgb(82, 196, 140);
/// Connecting / pending.
pub const WARNING: Color = Color::Rgb(235, 188, 90);
/// Errors and failures.
pub const ERROR: Color = Color::Rgb(224, 92, 108);

// === UI Elements ===

/// Default border color.
pub const BORDER: Color = Color::Rgb(48, 52, 70);
/// Focused/overlay border color.
pub const BORDER_FOCUSED: Color = ACCENT;
/// Selected row background color.
pub const ROW_SELECTED_BG: Color = Color::Rgb(36, 38, 52);
/// Selected row text color.
pub const ROW_SELECTED_FG: Color = ACCENT;

/// Badge color for a latency value: green under 50 ms, yellow under 100 ms,
/// red above.
#[must_use]
pub const fn latency_color(latency_ms: u32) -> Color {
    if latency_ms < constants::LATENCY_GOOD_MS {
        SUCCESS
    } else if latency_ms < constants::LATENCY_FAIR_MS {
        WARNING
    } else {
        ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_thresholds() {
        assert_eq!(latency_color(25), SUCCESS);
        assert_eq!(latency_color(85), WARNING);
        assert_eq!(latency_color(120), ERROR);
    }
}
