//! main.rs
//! Entry point for lista (`lst`)

use lista::config::Config;
use lista::core::walker::PROGRAM_NAME;
use lista::core::{Decorator, ListError, Lister, SystemIdentity, effective_width, terminal};
use lista::utils::cli::{CliAction, handle_args};
use lista::utils::init_logging;

use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let args = match handle_args() {
        CliAction::InitConfig => {
            return match Config::generate_default(&Config::default_path()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{}: {}", PROGRAM_NAME, e);
                    ExitCode::FAILURE
                }
            };
        }
        CliAction::List(args) => args,
    };

    let config = Config::load();
    let render = args.render_config(
        config.general(),
        terminal::stdout_is_terminal(),
        terminal::no_color_requested(),
    );
    let decorator = Decorator::new(render.colorize, config.theme());
    let identity = SystemIdentity::new();
    let width = effective_width(terminal::terminal_width());
    let lister = Lister::new(&render, &decorator, &identity, width);

    let mut out = io::BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    // Unreadable directories are reported but never change the exit status
    match lister.list_paths(args.paths(), &mut out, &mut err) {
        Ok(summary) => {
            tracing::debug!(?summary, "listing finished");
            ExitCode::SUCCESS
        }
        Err(ListError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            ExitCode::FAILURE
        }
    }
}
