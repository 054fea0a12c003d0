//! Configuration module for lista.
//!
//! Holds the [load] submodule which reads `lista.toml`, plus the [general] listing defaults
//! and the [theme] used to color entries.
//!
//! Command-line flags always win over values from the file.

pub mod general;
pub mod load;
pub mod theme;

pub use general::{ColorMode, General, InternalGeneral};
pub use load::Config;
pub use theme::Theme;
