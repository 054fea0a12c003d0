//! Theme configuration options for lista
//!
//! This module defines the `[theme]` table of lista.toml: one color per decoration class.
//! Colors accept terminal names ("cyan") or hex codes ("#RRGGBB", "#RGB");
//! "default" means the entry is printed without any color.

use crate::utils::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// directory = "#5f87ff"
/// symlink = "magenta"
/// bold_directories = false
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    plain: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    error: Color,
    bold_directories: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: Color::Blue,
            symlink: Color::Cyan,
            executable: Color::Green,
            plain: Color::Reset,
            error: Color::Red,
            bold_directories: true,
        }
    }
}

impl Theme {
    // Getters

    #[inline]
    pub fn directory(&self) -> Color {
        self.directory
    }

    #[inline]
    pub fn symlink(&self) -> Color {
        self.symlink
    }

    #[inline]
    pub fn executable(&self) -> Color {
        self.executable
    }

    #[inline]
    pub fn plain(&self) -> Color {
        self.plain
    }

    #[inline]
    pub fn error(&self) -> Color {
        self.error
    }

    #[inline]
    pub fn bold_directories(&self) -> bool {
        self.bold_directories
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
