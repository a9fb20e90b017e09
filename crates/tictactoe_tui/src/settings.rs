//! Session settings: TOML file plus command-line overrides.

use crate::cli::Cli;
use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_core::{Difficulty, GameConfig, GameMode};
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field has a default, so an empty file (or no file at all)
/// yields a playable setup. Command-line flags override file values
/// via [`Settings::merge`].
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Game mode (pvp or pvc).
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Computer strength in pvc mode (easy or hard).
    #[serde(default = "default_difficulty")]
    difficulty: Difficulty,

    /// Color theme (dark or light).
    #[serde(default)]
    theme: Theme,

    /// Pause before the computer answers, in milliseconds.
    /// Zero answers on the next tick.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Fixed RNG seed for reproducible computer play.
    #[serde(default)]
    seed: Option<u64>,

    /// Log file path.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_mode() -> GameMode {
    GameMode::PvP
}

#[instrument]
fn default_difficulty() -> Difficulty {
    Difficulty::Easy
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(mode = %settings.mode, difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Resolves the effective settings: the file named by `--config`
    /// when given, defaults otherwise, with command-line flags applied
    /// on top.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        let settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.merge(cli)
    }

    /// Applies command-line overrides to these settings.
    pub fn merge(mut self, cli: &Cli) -> Result<Self, SettingsError> {
        if let Some(mode) = &cli.mode {
            self.mode = mode.parse().map_err(|_| {
                SettingsError::new(format!("Unknown mode '{}' (expected pvp or pvc)", mode))
            })?;
        }
        if let Some(difficulty) = &cli.difficulty {
            self.difficulty = difficulty.parse().map_err(|_| {
                SettingsError::new(format!(
                    "Unknown difficulty '{}' (expected easy or hard)",
                    difficulty
                ))
            })?;
        }
        if let Some(theme) = &cli.theme {
            self.theme = theme.parse().map_err(|_| {
                SettingsError::new(format!(
                    "Unknown theme '{}' (expected dark or light)",
                    theme
                ))
            })?;
        }
        if let Some(delay) = cli.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        Ok(self)
    }

    /// The game configuration these settings describe.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.mode, self.difficulty)
    }

    /// The computer's reply delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            difficulty: default_difficulty(),
            theme: Theme::default(),
            ai_delay_ms: default_ai_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
