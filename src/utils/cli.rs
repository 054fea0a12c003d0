//! Command-line argument parsing for lista.
//!
//! Turns the process arguments into a [CliAction]. Listing flags are merged with the
//! `[general]` config table in [ListArgs::render_config]; flags always win.
//!
//! When invoked with no args (`lst`), the current directory is listed in columns.

use crate::config::{ColorMode, InternalGeneral};
use crate::core::RenderConfig;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lst",
    version,
    about = "List directory contents",
    after_help = "ENVIRONMENT:\n  LISTA_CONFIG   Override the default config path\n  LISTA_LOG      Diagnostic log filter (e.g. debug)\n  NO_COLOR       Disable colors in auto mode"
)]
pub struct Cli {
    /// Include entries whose names begin with '.'
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Use the long listing format
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// List subdirectories recursively (takes precedence over -l)
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Color entry names by kind
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "always"
    )]
    color: Option<ColorMode>,

    /// Print sizes in decimal units (e.g. 1.23 kB)
    #[arg(long = "human-readable")]
    human_readable: bool,

    /// Generate a default configuration file and exit
    #[arg(long)]
    init: bool,

    /// Directories to list (defaults to the current directory)
    #[arg(value_name = "DIR")]
    paths: Vec<PathBuf>,
}

pub enum CliAction {
    List(ListArgs),
    InitConfig,
}

/// The listing part of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    paths: Vec<PathBuf>,
    all: bool,
    long: bool,
    recursive: bool,
    color: Option<ColorMode>,
    human_readable: bool,
}

impl From<Cli> for CliAction {
    fn from(cli: Cli) -> Self {
        if cli.init {
            return CliAction::InitConfig;
        }
        let paths = if cli.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            cli.paths
        };
        CliAction::List(ListArgs {
            paths,
            all: cli.all,
            long: cli.long,
            recursive: cli.recursive,
            color: cli.color,
            human_readable: cli.human_readable,
        })
    }
}

/// Parses the process arguments. Prints help/version or a usage error and exits when asked to.
pub fn handle_args() -> CliAction {
    Cli::parse().into()
}

/// Parses an explicit argument list (the first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<CliAction, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(CliAction::from)
}

impl ListArgs {
    #[inline]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Builds the [RenderConfig] for this invocation.
    ///
    /// `is_terminal` and `no_color` describe stdout and the environment; they only matter
    /// when the color mode resolves to `auto`.
    pub fn render_config(
        &self,
        general: &InternalGeneral,
        is_terminal: bool,
        no_color: bool,
    ) -> RenderConfig {
        let color = self.color.unwrap_or(general.color());
        RenderConfig {
            show_hidden: self.all || general.show_hidden(),
            long_format: self.long,
            recursive: self.recursive,
            colorize: color.enabled(is_terminal, no_color),
            human_sizes: self.human_readable || general.human_sizes(),
            max_depth: general.max_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn list_args(args: &[&str]) -> Result<ListArgs, Box<dyn std::error::Error>> {
        match parse_from(args)? {
            CliAction::List(list) => Ok(list),
            CliAction::InitConfig => Err("unexpected --init".into()),
        }
    }

    #[test]
    fn defaults_to_current_directory() -> Result<(), Box<dyn std::error::Error>> {
        let args = list_args(&["lst"])?;
        assert_eq!(args.paths(), &[PathBuf::from(".")]);

        let config = args.render_config(Config::default().general(), false, false);
        assert_eq!(config, RenderConfig::default());
        Ok(())
    }

    #[test]
    fn combined_short_flags() -> Result<(), Box<dyn std::error::Error>> {
        let args = list_args(&["lst", "-laR", "one", "two"])?;
        assert_eq!(args.paths(), &[PathBuf::from("one"), PathBuf::from("two")]);

        let config = args.render_config(Config::default().general(), false, false);
        assert!(config.show_hidden && config.long_format && config.recursive);
        Ok(())
    }

    #[test]
    fn color_flag_forms() -> Result<(), Box<dyn std::error::Error>> {
        let general = Config::default();
        let general = general.general();

        // auto: only on a terminal
        assert!(!list_args(&["lst"])?.render_config(general, false, false).colorize);
        assert!(list_args(&["lst"])?.render_config(general, true, false).colorize);
        assert!(!list_args(&["lst"])?.render_config(general, true, true).colorize);

        assert!(list_args(&["lst", "--color"])?.render_config(general, false, false).colorize);
        assert!(
            list_args(&["lst", "--color=always"])?
                .render_config(general, false, true)
                .colorize
        );
        assert!(
            !list_args(&["lst", "--color=never"])?
                .render_config(general, true, false)
                .colorize
        );
        Ok(())
    }

    #[test]
    fn init_and_unknown_flags() {
        assert!(matches!(parse_from(["lst", "--init"]), Ok(CliAction::InitConfig)));
        assert!(parse_from(["lst", "-z"]).is_err());
    }
}
