//! The main config loading module for lista.
//!
//! Handles loading and deserializing settings from `lista.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing file is not an error: lista runs on internal defaults.

use crate::config::Theme;
use crate::config::{General, InternalGeneral};
use crate::utils::get_home;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file
/// and then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
}

/// Main configuration struct for lista
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: raw.theme,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point once at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, with the same fallbacks as [Config::load].
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    tracing::warn!("error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the LISTA_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lista/lista.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LISTA_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lista/lista.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lista/lista.toml");
        }
        PathBuf::from("lista.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# lista.toml - default configuration for lista (lst)

# Note:
# Commented values are the internal defaults of lista
# Command-line flags (-a, --color, --human-readable) override these.
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# show_hidden = false
# color = "auto"          # "auto", "always" or "never"
# human_sizes = false
# max_depth = 64          # deepest level -R descends to

[theme]
# directory = "blue"
# symlink = "cyan"
# executable = "green"
# plain = "default"
# error = "red"
# bold_directories = true
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert!(!config.general().show_hidden());
        assert_eq!(config.general().color(), ColorMode::Auto);
        assert_eq!(config.theme(), &Theme::default());
        Ok(())
    }

    #[test]
    fn invalid_file_gives_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("lista.toml");
        fs::write(&path, "[general\nshow_hidden = ")?;
        let config = Config::load_from(&path);
        assert!(!config.general().show_hidden());
        Ok(())
    }

    #[test]
    fn reads_values_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("lista.toml");
        fs::write(
            &path,
            "[general]\nshow_hidden = true\nhuman_sizes = true\n[theme]\nerror = \"yellow\"\n",
        )?;
        let config = Config::load_from(&path);
        assert!(config.general().show_hidden());
        assert!(config.general().human_sizes());
        assert_eq!(
            config.theme().error(),
            crossterm::style::Color::Yellow
        );
        Ok(())
    }

    #[test]
    fn generated_default_parses_and_is_not_overwritten() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = tempdir()?;
        let path = dir.path().join("nested/lista.toml");
        Config::generate_default(&path)?;

        let raw: RawConfig = toml::from_str(&fs::read_to_string(&path)?)?;
        let config = Config::from(raw);
        assert_eq!(config.theme(), &Theme::default());

        let again = Config::generate_default(&path);
        assert!(matches!(again, Err(e) if e.kind() == io::ErrorKind::AlreadyExists));
        Ok(())
    }
}
