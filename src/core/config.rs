//! Game configuration types.
//!
//! Front ends configure the engines by providing:
//! - `MatchConfig`: Tic-Tac-Toe match length and turn order
//! - `TableConfig`: Twenty-One table options
//!
//! Both serialize with serde so a front end can persist or print them.

use serde::{Deserialize, Serialize};

use super::rng::Picker;
use super::side::Side;

/// Who moves first in the opening round of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    /// The human opens.
    Player,
    /// The computer opens.
    Computer,
    /// Decided by a single pick.
    #[default]
    Random,
}

impl FirstPlayer {
    /// Resolve to a concrete side.
    ///
    /// `Random` consumes one `pick(2)`: 0 is the player, 1 the computer.
    pub fn resolve(self, picker: &mut impl Picker) -> Side {
        match self {
            FirstPlayer::Player => Side::Player,
            FirstPlayer::Computer => Side::Computer,
            FirstPlayer::Random => Side::ALL[picker.pick(Side::ALL.len())],
        }
    }
}

/// Tic-Tac-Toe match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins needed to take the match.
    pub rounds_needed: u32,

    /// Who opens the first round. Later rounds alternate.
    pub first_player: FirstPlayer,

    /// Seed for the opponent's random moves. `None` for entropy.
    pub seed: Option<u64>,

    /// Pause between screens in milliseconds (0 = no pause).
    pub pacing_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds_needed: 2,
            first_player: FirstPlayer::Random,
            seed: None,
            pacing_ms: 2000,
        }
    }
}

impl MatchConfig {
    /// Set the number of round wins needed.
    #[must_use]
    pub fn with_rounds_needed(mut self, rounds: u32) -> Self {
        self.rounds_needed = rounds;
        self
    }

    /// Set who opens the first round.
    #[must_use]
    pub fn with_first_player(mut self, first: FirstPlayer) -> Self {
        self.first_player = first;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause between screens.
    #[must_use]
    pub fn with_pacing_ms(mut self, pacing_ms: u64) -> Self {
        self.pacing_ms = pacing_ms;
        self
    }

    /// Check the configuration describes a playable match.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds_needed == 0 {
            return Err("a match needs at least one round win".to_string());
        }
        Ok(())
    }
}

/// Twenty-One table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed for deck shuffles. `None` for entropy.
    pub seed: Option<u64>,

    /// Pause between screens in milliseconds (0 = no pause).
    pub pacing_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing_ms: 2000,
        }
    }
}

impl TableConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause between screens.
    #[must_use]
    pub fn with_pacing_ms(mut self, pacing_ms: u64) -> Self {
        self.pacing_ms = pacing_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedPicker;

    #[test]
    fn test_default_match_config() {
        let config = MatchConfig::default();
        assert_eq!(config.rounds_needed, 2);
        assert_eq!(config.first_player, FirstPlayer::Random);
        assert_eq!(config.seed, None);
        assert_eq!(config.pacing_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_rounds_needed(3)
            .with_first_player(FirstPlayer::Computer)
            .with_seed(123);

        assert_eq!(config.rounds_needed, 3);
        assert_eq!(config.first_player, FirstPlayer::Computer);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = MatchConfig::default().with_rounds_needed(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_first_player_resolution() {
        let mut picker = ScriptedPicker::new([0, 1]);
        assert_eq!(FirstPlayer::Player.resolve(&mut picker), Side::Player);
        assert_eq!(FirstPlayer::Computer.resolve(&mut picker), Side::Computer);
        // Fixed choices leave the script untouched
        assert_eq!(picker.remaining(), 2);

        assert_eq!(FirstPlayer::Random.resolve(&mut picker), Side::Player);
        assert_eq!(FirstPlayer::Random.resolve(&mut picker), Side::Computer);
    }

    #[test]
    fn test_table_config_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.pacing_ms, 2000);

        let config = config.with_seed(9).with_pacing_ms(0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pacing_ms, 0);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
