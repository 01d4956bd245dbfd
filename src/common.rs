//! Common types for the engine: board errors and shot results.

use crate::grid::GridError;
use core::fmt;

/// Outcome of a shot resolved against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The shot struck an unhit ship segment.
    Hit,
    /// The shot landed in open water.
    Miss,
    /// The cell was already Hit or Miss; nothing changed.
    AlreadyTargeted,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ships must be at least one cell long.
    InvalidShipLength(usize),
    /// Part of the ship would lie outside the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement gave up after `attempts` draws.
    UnableToPlaceShip { length: usize, attempts: u32 },
    /// A ship cell was hit but no tracked ship covers it.
    UnknownShipHit,
}

impl BoardError {
    /// `true` for the recoverable placement failures a caller retries with new input.
    pub fn is_invalid_placement(&self) -> bool {
        matches!(self, BoardError::ShipOutOfBounds | BoardError::ShipOverlaps)
    }
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::UnknownShipHit => write!(f, "Hit a ship cell not owned by any ship"),
        }
    }
}

impl core::error::Error for BoardError {}
