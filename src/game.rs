//! Match controller: owns both boards, alternates turns and detects the winner.

use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::Board,
    common::{BoardError, ShotResult},
    config::{ConfigError, GameConfig},
    strategy::{MoveError, Rejection, Strategy},
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    InProgress,
    Finished { winner: Side },
}

/// What happened during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub row: usize,
    pub col: usize,
    pub result: ShotResult,
    /// Length of the ship this shot sank, if any.
    pub sunk: Option<usize>,
}

/// Errors that abort setup or play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Config(ConfigError),
    Board(BoardError),
    /// A manual coordinate source stopped answering.
    InputClosed(Side),
    /// Every cell of this side's target board is already resolved.
    NoTargetsRemaining(Side),
    NotInSetup(GamePhase),
    NotInProgress(GamePhase),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "Invalid configuration: {}", e),
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::InputClosed(side) => write!(f, "Input for {:?} ended", side),
            GameError::NoTargetsRemaining(side) => {
                write!(f, "{:?} has no unresolved cells left to target", side)
            }
            GameError::NotInSetup(phase) => write!(f, "Match is not in setup: {:?}", phase),
            GameError::NotInProgress(phase) => {
                write!(f, "Match is not in progress: {:?}", phase)
            }
        }
    }
}

impl core::error::Error for GameError {}

fn move_error(side: Side, err: MoveError) -> GameError {
    match err {
        MoveError::Board(e) => GameError::Board(e),
        MoveError::InputClosed => GameError::InputClosed(side),
        MoveError::NoTargets => GameError::NoTargetsRemaining(side),
    }
}

/// A single match between two sides.
///
/// `boards[side]` holds that side's own fleet; a side shoots at its
/// opponent's board.
pub struct Game {
    config: GameConfig,
    boards: [Board; 2],
    strategies: [Strategy; 2],
    phase: GamePhase,
    turn: Side,
    turns_played: usize,
    rng: SmallRng,
}

impl Game {
    /// Create a match in the Setup phase with a seeded random source.
    pub fn new(
        config: GameConfig,
        player: Strategy,
        opponent: Strategy,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_rng(config, player, opponent, SmallRng::seed_from_u64(seed))
    }

    /// Create a match that draws all randomness from `rng`.
    pub fn with_rng(
        config: GameConfig,
        player: Strategy,
        opponent: Strategy,
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let boards = [Board::new(config.board_size), Board::new(config.board_size)];
        Ok(Self {
            config,
            boards,
            strategies: [player, opponent],
            phase: GamePhase::Setup,
            turn: Side::Player,
            turns_played: 0,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose turn is next.
    pub fn current_side(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// `side`'s own board.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Number of opponent ships `side` has sunk.
    pub fn score(&self, side: Side) -> usize {
        let target = &self.boards[side.opponent().index()];
        target.ships().len() - target.remaining_ship_count()
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Place both fleets (Player first) and start play.
    ///
    /// Boards are only replaced once both fleets are down; after an error
    /// both stay empty and `setup` may be called again.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::NotInSetup(self.phase));
        }
        let size = self.config.board_size;
        let mut boards = [Board::new(size), Board::new(size)];
        for side in [Side::Player, Side::Opponent] {
            let i = side.index();
            self.strategies[i]
                .place_fleet(
                    &mut self.rng,
                    &mut boards[i],
                    &self.config.fleet,
                    self.config.max_placement_attempts,
                )
                .map_err(|e| move_error(side, e))?;
            debug!("{:?} fleet placed", side);
        }
        self.boards = boards;
        self.phase = GamePhase::InProgress;
        info!("setup complete, {:?} moves first", self.turn);
        Ok(())
    }

    /// Let the current side fire one shot.
    ///
    /// Refused manual input (off-board or already shot) is reported to the
    /// source and asked for again without ending the turn.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::NotInProgress(self.phase));
        }
        let side = self.turn;
        let (own, target) = match side {
            Side::Player => {
                let [own, target] = &mut self.boards;
                (own, target)
            }
            Side::Opponent => {
                let [target, own] = &mut self.boards;
                (own, target)
            }
        };
        let strategy = &mut self.strategies[side.index()];

        let (row, col, result) = loop {
            let (row, col) = strategy
                .select_target(&mut self.rng, own, target.target_view())
                .map_err(|e| move_error(side, e))?;
            match target.resolve_shot(row, col) {
                Ok(ShotResult::AlreadyTargeted) => {
                    strategy.reject(Rejection::AlreadyTargeted { row, col })
                }
                Ok(result) => break (row, col, result),
                Err(BoardError::OutOfBounds { row, col }) => {
                    strategy.reject(Rejection::OutOfBounds { row, col })
                }
                Err(e) => return Err(e.into()),
            }
        };

        let sunk = match result {
            ShotResult::Hit => target
                .ship_at(row, col)
                .filter(|ps| ps.ship().is_sunk())
                .map(|ps| ps.ship().length()),
            _ => None,
        };
        self.turns_played += 1;
        debug!(
            "turn {}: {:?} fired at ({}, {}): {:?}",
            self.turns_played, side, row, col, result
        );

        if result == ShotResult::Hit && target.remaining_ship_count() == 0 {
            self.phase = GamePhase::Finished { winner: side };
            info!("{:?} wins after {} turns", side, self.turns_played);
        } else {
            self.turn = side.opponent();
        }

        Ok(TurnReport {
            side,
            row,
            col,
            result,
            sunk,
        })
    }

    /// Run setup if needed, then play until one side wins.
    pub fn run(&mut self) -> Result<Side, GameError> {
        if self.phase == GamePhase::Setup {
            self.setup()?;
        }
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("turns_played", &self.turns_played)
            .field("player_board", &self.boards[0])
            .field("opponent_board", &self.boards[1])
            .finish()
    }
}
