//! Miscellaneous utility functions for lista.
//!
//! - [cli]: command-line flag parsing into a [cli::CliAction]
//! - [helpers]: color parsing, home directory lookup, depth limits
//! - [logging]: tracing subscriber setup

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, MIN_MAX_DEPTH, clamp_max_depth, get_home, parse_color,
};
pub use logging::init_logging;
