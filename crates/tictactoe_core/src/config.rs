//! Game configuration: mode and difficulty.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Game mode - who plays O?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the keyboard.
    PvP,
    /// A human plays X against the computer.
    PvC,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::PvP => "Player vs Player",
            GameMode::PvC => "Player vs Computer",
        }
    }
}

/// Computer opponent difficulty.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Win, block, center, corner, then random.
    Hard,
}

impl Difficulty {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Configuration for a game.
///
/// Set before a game starts and fixed until the next reset;
/// `GameEngine::configure` installs a new configuration by starting
/// a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who plays O.
    mode: GameMode,
    /// Computer strength in PvC mode (ignored in PvP).
    difficulty: Difficulty,
}

impl GameConfig {
    /// Creates a new game configuration.
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self { mode, difficulty }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PvP,
            difficulty: Difficulty::Easy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_parses_lowercase() {
        assert_eq!(GameMode::from_str("pvp"), Ok(GameMode::PvP));
        assert_eq!(GameMode::from_str("pvc"), Ok(GameMode::PvC));
        assert!(GameMode::from_str("tournament").is_err());
    }

    #[test]
    fn test_difficulty_parses_lowercase() {
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("hard"), Ok(Difficulty::Hard));
        assert!(Difficulty::from_str("impossible").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode(), &GameMode::PvP);
        assert_eq!(config.difficulty(), &Difficulty::Easy);
    }
}
