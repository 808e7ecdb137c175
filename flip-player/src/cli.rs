//! Command-line interface for `flip`.

use crate::config::{Config, ConfigError};
use clap::{Parser, ValueEnum};
use flip_othello::{CaptureRule, Player};
use std::path::{Path, PathBuf};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG: &str = "flip.toml";

/// Play the disc-flipping game in the terminal. Enter moves as `r, c`;
/// Ctrl-C or `quit` ends the game.
#[derive(Parser, Debug)]
#[command(name = "flip", version, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file [default: flip.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How captured runs combine; overrides the config file
    #[arg(long, value_enum)]
    pub capture_rule: Option<RuleArg>,

    /// Who moves first; overrides the config file
    #[arg(long, value_enum)]
    pub first_player: Option<PlayerArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    /// Flip only the longest bracketed run
    LongestRun,
    /// Flip every bracketed run
    AllDirections,
}

impl From<RuleArg> for CaptureRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::LongestRun => CaptureRule::LongestRun,
            RuleArg::AllDirections => CaptureRule::AllDirections,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    Black,
    White,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Black => Player::Black,
            PlayerArg::White => Player::White,
        }
    }
}

impl Cli {
    /// Load the config file and apply the command-line overrides.
    ///
    /// A file named with `--config` must exist; the default one is optional.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(Path::new(DEFAULT_CONFIG))?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(rule) = self.capture_rule {
            config.capture_rule = rule.into();
        }
        if let Some(player) = self.first_player {
            config.first_player = player.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["flip"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.capture_rule, None);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "flip",
            "--config",
            "other.toml",
            "--capture-rule",
            "all-directions",
            "--first-player",
            "white",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert_eq!(config.capture_rule, CaptureRule::AllDirections);
        assert_eq!(config.first_player, Player::White);
    }

    #[test]
    fn rejects_unknown_rule() {
        assert!(Cli::try_parse_from(["flip", "--capture-rule", "sideways"]).is_err());
    }

    #[test]
    fn default_config_file_is_optional() {
        let cli = Cli::try_parse_from(["flip", "--first-player", "white"]).unwrap();
        assert!(!Path::new(DEFAULT_CONFIG).exists());

        let config = cli.load_config().unwrap();
        assert_eq!(config.first_player, Player::White);
        assert_eq!(config.capture_rule, CaptureRule::LongestRun);
    }

    #[test]
    fn named_config_file_must_exist() {
        let cli = Cli::try_parse_from(["flip", "--config", "no/such/dir/flip.toml"]).unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
