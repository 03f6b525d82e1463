//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::Form => Color::Green,
        Source::Vitals => Color::Yellow,
        Source::Theme => Color::Magenta,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Parse a "#rrggbb" hex string into a terminal color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Celebration animation frames, advanced by the UI tick.
const BALLOON_FRAMES: [&str; 4] = [
    "  🎈      🎈    🎈  ",
    "    🎈  🎈    🎈    ",
    "  🎈    🎈  🎈      ",
    "🎈    🎈      🎈    ",
];

pub fn balloon_frame(tick: usize) -> &'static str {
    BALLOON_FRAMES[(tick / 2) % BALLOON_FRAMES.len()]
}
