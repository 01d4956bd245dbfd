//! Targeting strategies: who chooses placements and shots for a side.
//!
//! - `Automated`: blind uniform search, see [`crate::ai`]
//! - `Manual`: coordinates come from a [`CoordinateSource`] supplied by the
//!   presentation layer (console, tests)

use alloc::boxed::Box;
use log::warn;
use rand::rngs::SmallRng;

use crate::ai;
use crate::board::{Board, TargetView};
use crate::common::BoardError;
use crate::ship::{Orientation, Ship};

/// A placement answer from a manual coordinate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementChoice {
    At {
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    /// Let the engine place this ship at random.
    Random,
}

/// Why manual input was refused. The source is asked again afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidPlacement(BoardError),
    OutOfBounds { row: usize, col: usize },
    AlreadyTargeted { row: usize, col: usize },
}

/// External supplier of manual coordinates.
pub trait CoordinateSource {
    /// Where to put the next ship of `length`. `None` means input has ended.
    fn next_placement(&mut self, length: usize, board: &Board) -> Option<PlacementChoice>;

    /// Which cell of the opponent to shoot. `None` means input has ended.
    fn next_target(&mut self, own: &Board, target: TargetView<'_>) -> Option<(usize, usize)>;

    /// Inform the source that its last answer was refused.
    fn rejected(&mut self, _rejection: Rejection) {}
}

/// Automated side: random fleet layout and non-repeating random shots.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedStrategy;

impl AutomatedStrategy {
    pub fn new() -> Self {
        Self
    }
}

/// How one side chooses its moves, fixed at setup.
pub enum Strategy {
    Manual(Box<dyn CoordinateSource>),
    Automated(AutomatedStrategy),
}

/// Failure to obtain a move from a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveError {
    Board(BoardError),
    InputClosed,
    NoTargets,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl Strategy {
    pub fn manual<S: CoordinateSource + 'static>(source: S) -> Self {
        Strategy::Manual(Box::new(source))
    }

    pub fn automated() -> Self {
        Strategy::Automated(AutomatedStrategy::new())
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, Strategy::Manual(_))
    }

    /// Place every ship of `fleet` on `board`.
    pub(crate) fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[usize],
        max_attempts: u32,
    ) -> Result<(), MoveError> {
        let source = match self {
            Strategy::Automated(_) => {
                return Ok(ai::place_fleet_randomly(rng, board, fleet, max_attempts)?)
            }
            Strategy::Manual(source) => source,
        };
        for &length in fleet {
            loop {
                let choice = source
                    .next_placement(length, board)
                    .ok_or(MoveError::InputClosed)?;
                let placed = match choice {
                    PlacementChoice::Random => {
                        ai::place_ship_randomly(rng, board, length, max_attempts)
                    }
                    PlacementChoice::At {
                        row,
                        col,
                        orientation,
                    } => board.place_ship(Ship::new(length), row, col, orientation),
                };
                match placed {
                    Ok(_) => break,
                    Err(e) if e.is_invalid_placement() => {
                        warn!("rejected placement of ship of length {}: {}", length, e);
                        source.rejected(Rejection::InvalidPlacement(e));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }

    /// Choose the next coordinate to shoot on the opponent's board.
    pub(crate) fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Board,
        target: TargetView<'_>,
    ) -> Result<(usize, usize), MoveError> {
        match self {
            Strategy::Automated(_) => ai::random_target(rng, &target).ok_or(MoveError::NoTargets),
            Strategy::Manual(source) => source
                .next_target(own, target)
                .ok_or(MoveError::InputClosed),
        }
    }

    /// Report a refused shot. Automated play resamples without feedback.
    pub(crate) fn reject(&mut self, rejection: Rejection) {
        if let Strategy::Manual(source) = self {
            warn!("rejected manual shot: {:?}", rejection);
            source.rejected(rejection);
        }
    }
}

impl core::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Strategy::Manual(_) => write!(f, "Strategy::Manual"),
            Strategy::Automated(_) => write!(f, "Strategy::Automated"),
        }
    }
}
