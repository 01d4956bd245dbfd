//! Match configuration: board size, fleet composition and placement limits.

use alloc::vec::Vec;
use core::fmt;

pub const BOARD_SIZE: usize = 10;
/// One ship of each length from 1 to 5.
pub const DEFAULT_FLEET: [usize; 5] = [1, 2, 3, 4, 5];
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Errors found by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The fleet has no ships, so no match could ever end.
    EmptyFleet,
    /// A ship of length zero was requested.
    ZeroLengthShip,
    /// A ship is longer than the board is wide.
    ShipTooLong { length: usize, board_size: usize },
    /// The fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Random placement would never be attempted.
    ZeroAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ZeroLengthShip => write!(f, "Ship lengths must be positive"),
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "Ship of length {} does not fit on a {}x{} board",
                length, board_size, board_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet occupies {} cells but the board only has {}",
                cells, capacity
            ),
            ConfigError::ZeroAttempts => write!(f, "Placement attempt limit must be positive"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Parameters fixed for the lifetime of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    /// Ship lengths, placed in this order by both sides.
    pub fleet: Vec<usize>,
    /// Random draws allowed for laying out one fleet before setup fails.
    pub max_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_fleet(mut self, fleet: &[usize]) -> Self {
        self.fleet = fleet.to_vec();
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Ships per side; a side wins by sinking this many.
    pub fn total_ships(&self) -> usize {
        self.fleet.len()
    }

    /// Check that a fleet of this shape can be laid out at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        for &length in &self.fleet {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip);
            }
            if length > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    length,
                    board_size: self.board_size,
                });
            }
        }
        let cells: usize = self.fleet.iter().sum();
        let capacity = self.board_size * self.board_size;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}
