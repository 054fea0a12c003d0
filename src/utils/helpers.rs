//! Helpers for lista.
//!
//! Defines the limits for the recursion depth guard and a few small utilities:
//! - Color parsing from strings or hex codes
//! - Locating the home directory
//! - Clamping the configured recursion depth to safe values

use crossterm::style::Color;
use std::path::PathBuf;

/// Smallest accepted recursion depth. Zero would make `-R` a plain listing.
pub const MIN_MAX_DEPTH: usize = 1;
/// The default recursion depth. Can be overwritten in lista.toml.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Hard upper bound on the recursion depth.
pub const MAX_DEPTH_LIMIT: usize = 4096;

/// Parses a string (color name or hex) into a crossterm::style::Color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "darkgrey" => Color::DarkGrey,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => Some(color.to_string()),
                    3 => Some(
                        color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>(),
                    ),
                    _ => None,
                };
                if let Some(hex) = expanded
                    && hex.bytes().all(|b| b.is_ascii_hexdigit())
                    && let Ok(rgb) = u32::from_str_radix(&hex, 16)
                {
                    return Color::Rgb {
                        r: ((rgb >> 16) & 0xFF) as u8,
                        g: ((rgb >> 8) & 0xFF) as u8,
                        b: (rgb & 0xFF) as u8,
                    };
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// The current user's home directory, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Safely clamp the configured recursion depth.
pub fn clamp_max_depth(value: usize) -> usize {
    let clamped = value.clamp(MIN_MAX_DEPTH, MAX_DEPTH_LIMIT);
    if clamped != value {
        tracing::warn!(
            "max_depth={} out of range ({}..={}), clamped to {}",
            value,
            MIN_MAX_DEPTH,
            MAX_DEPTH_LIMIT,
            clamped
        );
    }
    clamped
}
