//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Cell, CoordinateSource, Game, GameConfig, GameError, GamePhase,
    Orientation, PlacementChoice, Rejection, Ship, ShotResult, Side, Strategy, TargetView,
    TurnReport,
};

#[cfg(feature = "std")]
pub use crate::cli::{describe_turn, render_board, render_target_view, ConsoleSource};
#[cfg(feature = "std")]
pub use crate::init_logging;
