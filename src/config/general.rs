//! The general configuration settings for lista.
//!
//! This module defines the [General] struct for deserializing
//! the `[general]` table of lista.toml and the [InternalGeneral] struct used at runtime.

use crate::utils::{DEFAULT_MAX_DEPTH, clamp_max_depth};

use clap::ValueEnum;
use serde::Deserialize;

/// When to color entry names.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current output.
    pub fn enabled(self, is_terminal: bool, no_color: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal && !no_color,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    color: ColorMode,
    human_sizes: bool,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            color: ColorMode::Auto,
            human_sizes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    show_hidden: bool,
    color: ColorMode,
    human_sizes: bool,
    max_depth: usize,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            show_hidden: g.show_hidden,
            color: g.color,
            human_sizes: g.human_sizes,
            max_depth: clamp_max_depth(g.max_depth),
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn color(&self) -> ColorMode {
        self.color
    }

    #[inline]
    pub fn human_sizes(&self) -> bool {
        self.human_sizes
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Helper function for default max_depth
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
