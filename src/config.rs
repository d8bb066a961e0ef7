//! Game configuration.

use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::error::GameError;

/// Parameters fixed when a game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board dimension (the board is `size` x `size`).
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: DEFAULT_SIZE }
    }
}

impl GameConfig {
    /// Build a validated configuration.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let config = GameConfig { size };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < MIN_SIZE {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be at least {MIN_SIZE} (got {})",
                self.size
            )));
        }
        if self.size > MAX_SIZE || self.size.checked_mul(self.size).is_none() {
            return Err(GameError::InvalidConfiguration(format!(
                "board size must be at most {MAX_SIZE} (got {})",
                self.size
            )));
        }
        Ok(())
    }
}
