//! Default extension set and output format, kept in a TOML file.
//!
//! A missing file is not an error: callers fall back to [`Config::default`],
//! which enables no extensions and renders HTML.

use mdparse_engine::{Extension, Extensions, Format};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed TOML, or an extension or format name mdparse does not know.
    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default extensions and output format.
///
/// ```toml
/// extensions = ["smart", "notes", "fenced-code"]
/// format = "html"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extensions: Vec<Extension>,
    #[serde(default)]
    pub format: Format,
}

impl Config {
    /// Reads `path`, or returns `Ok(None)` when there is no file there.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = path.as_ref();
        let text = match std::fs::read_to_string(config_path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    /// Reads the file at [`Config::config_path`].
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes pretty TOML to `path`, creating missing directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `~/.config/mdparse/config.toml`, with the home directory expanded.
    pub fn config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/mdparse").as_ref()).join("config.toml")
    }

    /// The configured extensions as a flag set.
    pub fn extension_set(&self) -> Extensions {
        self.extensions.iter().copied().collect()
    }

    /// Formats markdown with the configured extensions and format.
    pub fn format_markdown(&self, markdown: &str) -> String {
        mdparse_engine::format_extended_markdown(markdown, self.extension_set(), self.format)
    }
}
