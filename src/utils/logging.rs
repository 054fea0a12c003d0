//! Diagnostic logging for lista.
//!
//! Listing output goes to stdout and user-facing errors are plain lines on stderr;
//! tracing output is for debugging lista itself and defaults to warnings only.
//! Set `LISTA_LOG` (or `RUST_LOG`) to e.g. `debug` to see per-directory events.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env("LISTA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
