//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_play_tictactoe::{Mark, Pruning};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
///
/// Choices left unset are asked for when the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark played by the human.
    #[serde(default)]
    human_mark: Option<Mark>,

    /// Whether the human moves first.
    #[serde(default)]
    human_first: Option<bool>,

    /// Alpha-beta pruning on or off.
    #[serde(default = "default_pruning")]
    pruning: bool,
}

#[instrument]
fn default_pruning() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: None,
            human_first: None,
            pruning: default_pruning(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with every choice fixed up front.
    #[instrument]
    pub fn new(human_mark: Mark, human_first: bool, pruning: bool) -> Self {
        Self {
            human_mark: Some(human_mark),
            human_first: Some(human_first),
            pruning,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        human_mark: Option<Mark>,
        human_first: Option<bool>,
        pruning: Option<bool>,
    ) -> Self {
        if human_mark.is_some() {
            self.human_mark = human_mark;
        }
        if human_first.is_some() {
            self.human_first = human_first;
        }
        if let Some(pruning) = pruning {
            self.pruning = pruning;
        }
        self
    }

    /// Pruning mode handed to the search.
    pub fn pruning_mode(&self) -> Pruning {
        if self.pruning {
            Pruning::AlphaBeta
        } else {
            Pruning::Disabled
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
