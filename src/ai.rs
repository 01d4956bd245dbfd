// Blind random placement and targeting for the automated side.
// No memory of ship shapes: every draw is uniform over the legal space.

use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, TargetView};
use crate::common::BoardError;
use crate::ship::{Orientation, Ship};

/// Draw a uniformly random orientation and an origin from which a ship of
/// `length` stays on a `size × size` board. Returns `None` if it cannot fit.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    length: usize,
) -> Option<(usize, usize, Orientation)> {
    if length == 0 || length > size {
        return None;
    }
    let orient = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let max_r = if orient == Orientation::Vertical {
        size - length
    } else {
        size - 1
    };
    let max_c = if orient == Orientation::Horizontal {
        size - length
    } else {
        size - 1
    };
    let r = rng.random_range(0..=max_r);
    let c = rng.random_range(0..=max_c);
    Some((r, c, orient))
}

/// Draws spent on one ship before the whole fleet layout is started over.
const DRAWS_BEFORE_RESTART: u32 = 200;

/// Try up to `limit` random positions for a ship of `length`.
/// Returns the placed index (if any) and the number of draws used.
fn place_within<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    length: usize,
    limit: u32,
) -> Result<(Option<usize>, u32), BoardError> {
    for used in 1..=limit {
        let (r, c, orient) = random_placement(rng, board.size(), length)
            .ok_or(BoardError::InvalidShipLength(length))?;
        match board.place_ship(Ship::new(length), r, c, orient) {
            Ok(idx) => return Ok((Some(idx), used)),
            Err(e) if e.is_invalid_placement() => continue,
            Err(e) => return Err(e),
        }
    }
    Ok((None, limit))
}

/// Place one ship of `length` by rejection sampling, giving up after
/// `max_attempts` draws.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    length: usize,
    max_attempts: u32,
) -> Result<usize, BoardError> {
    if let (Some(idx), _) = place_within(rng, board, length, max_attempts)? {
        return Ok(idx);
    }
    warn!(
        "gave up placing ship of length {} after {} attempts",
        length, max_attempts
    );
    Err(BoardError::UnableToPlaceShip {
        length,
        attempts: max_attempts,
    })
}

/// Place every ship of `fleet`, in order, at random legal positions.
///
/// Earlier ships can box in a later one, so a ship that finds no room
/// within `DRAWS_BEFORE_RESTART` draws discards the partial layout and
/// starts again. `max_attempts` caps the draws spent over all layouts.
/// On failure `board` is left as it was.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &[usize],
    max_attempts: u32,
) -> Result<(), BoardError> {
    let mut remaining = max_attempts;
    let mut restarts = 0u32;
    loop {
        let mut layout = board.clone();
        let mut stuck = None;
        for &length in fleet {
            let limit = remaining.min(DRAWS_BEFORE_RESTART);
            let (placed, used) = place_within(rng, &mut layout, length, limit)?;
            remaining -= used;
            if placed.is_none() {
                stuck = Some(length);
                break;
            }
        }
        match stuck {
            None => {
                *board = layout;
                debug!(
                    "placed fleet of {} ships after {} restarts",
                    fleet.len(),
                    restarts
                );
                return Ok(());
            }
            Some(length) if remaining == 0 => {
                warn!(
                    "gave up laying out fleet after {} attempts, ship of length {} did not fit",
                    max_attempts, length
                );
                return Err(BoardError::UnableToPlaceShip {
                    length,
                    attempts: max_attempts,
                });
            }
            Some(length) => {
                restarts += 1;
                debug!("ship of length {} boxed in, restarting layout", length);
            }
        }
    }
}

/// Draw uniform coordinates until one lands on a cell that has not been shot.
///
/// Returns `None` only when every cell of `view` is already resolved.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, view: &TargetView<'_>) -> Option<(usize, usize)> {
    let size = view.size();
    if view.unresolved_count() == 0 {
        return None;
    }
    loop {
        let r = rng.random_range(0..size);
        let c = rng.random_range(0..size);
        if let Ok(false) = view.is_resolved(r, c) {
            return Some((r, c));
        }
    }
}
