//! Terminal queries for lista.
//!
//! Display width and tty detection for stdout, both via crossterm / std.

use std::io::{self, IsTerminal};

/// Width of the terminal attached to stdout, in columns.
///
/// Returns `None` when stdout is not a terminal or the size cannot be read;
/// the layout engine then falls back to its default width.
pub fn terminal_width() -> Option<usize> {
    if !stdout_is_terminal() {
        return None;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => Some(cols as usize),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("terminal size unavailable: {}", e);
            None
        }
    }
}

#[inline]
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Whether the `NO_COLOR` convention asks for uncolored output.
pub fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
