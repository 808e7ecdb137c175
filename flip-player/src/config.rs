//! Player settings, loadable from TOML.
//!
//! ```toml
//! capture_rule = "all-directions"
//! first_player = "white"
//!
//! [glyphs]
//! empty = "-"
//! black = "x"
//! white = "o"
//! ```

use crate::render::Glyphs;
use derive_more::{Display, Error};
use flip_othello::{CaptureRule, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub capture_rule: CaptureRule,
    pub first_player: Player,
    pub glyphs: Glyphs,
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("failed to read config file {}: {source}", path.display())]
    FileRead { path: PathBuf, source: std::io::Error },
    #[display("failed to parse config: {_0}")]
    Parse(toml::de::Error),
    #[display("invalid config: {_0}")]
    Validation(#[error(not(source))] String),
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Glyphs must be visible and tell the three cell states apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Glyphs {
            empty,
            black,
            white,
        } = self.glyphs;

        if [empty, black, white].iter().any(|c| c.is_whitespace()) {
            return Err(ConfigError::Validation(
                "glyphs must not be whitespace".into(),
            ));
        }
        if empty == black || empty == white || black == white {
            return Err(ConfigError::Validation("glyphs must be distinct".into()));
        }

        Ok(())
    }
}
