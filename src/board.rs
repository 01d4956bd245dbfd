//! Game board: one grid plus the ships placed on it.

use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::common::{BoardError, ShotResult};
use crate::grid::{Cell, Grid, GridError};
use crate::ship::{run_cells, Orientation, PlacedShip, Ship};

/// Ship placements and shot history for one side.
///
/// Every shot updates the grid and the owning ship's hit counter together,
/// so the number of `ShipPresent` cells always equals the unhit segments
/// of the tracked ships.
#[derive(Clone)]
pub struct Board {
    grid: Grid,
    ships: Vec<PlacedShip>,
}

impl Board {
    /// Create an empty `size × size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        Board {
            grid: Grid::new(size),
            ships: Vec::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only access to the cell states, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// The ship covering (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&PlacedShip> {
        self.ships.iter().find(|ps| ps.contains(row, col))
    }

    /// Opponent-facing view that hides unhit ships.
    pub fn target_view(&self) -> TargetView<'_> {
        TargetView { grid: &self.grid }
    }

    /// Place `ship` with its first segment at (row, col), extending along
    /// `orientation`. Returns the index of the placed ship.
    ///
    /// Ships may touch but never share a cell.
    pub fn place_ship(
        &mut self,
        ship: Ship,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<usize, BoardError> {
        let len = ship.length();
        if len == 0 {
            return Err(BoardError::InvalidShipLength(len));
        }
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (Some(row), col.checked_add(len - 1)),
            Orientation::Vertical => (row.checked_add(len - 1), Some(col)),
        };
        match (end_row, end_col) {
            (Some(r), Some(c)) if self.grid.contains(row, col) && self.grid.contains(r, c) => {}
            _ => return Err(BoardError::ShipOutOfBounds),
        }
        for (r, c) in run_cells(row, col, orientation, len) {
            if self.grid.get(r, c)? == Cell::ShipPresent {
                return Err(BoardError::ShipOverlaps);
            }
        }
        for (r, c) in run_cells(row, col, orientation, len) {
            self.grid.set(r, c, Cell::ShipPresent)?;
        }
        self.ships.push(PlacedShip::new(ship, row, col, orientation));
        debug!(
            "placed ship of length {} at ({}, {}) {:?}",
            len, row, col, orientation
        );
        Ok(self.ships.len() - 1)
    }

    /// Resolve a shot at (row, col).
    ///
    /// A cell that was already Hit or Miss is left untouched and reported as
    /// [`ShotResult::AlreadyTargeted`].
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        let result = match self.grid.get(row, col)? {
            Cell::Hit | Cell::Miss => ShotResult::AlreadyTargeted,
            Cell::Empty => {
                self.grid.set(row, col, Cell::Miss)?;
                ShotResult::Miss
            }
            Cell::ShipPresent => {
                let placed = self
                    .ships
                    .iter_mut()
                    .find(|ps| ps.contains(row, col))
                    .ok_or(BoardError::UnknownShipHit)?;
                self.grid.set(row, col, Cell::Hit)?;
                placed.ship_mut().register_hit();
                ShotResult::Hit
            }
        };
        debug!("shot at ({}, {}): {:?}", row, col, result);
        Ok(result)
    }

    /// Returns `true` when no ship segment is left afloat.
    pub fn all_ships_sunk(&self) -> bool {
        self.grid.count_cells_with_state(Cell::ShipPresent) == 0
            && self.ships.iter().all(|ps| ps.ship().is_sunk())
    }

    /// Number of placed ships not yet sunk.
    pub fn remaining_ship_count(&self) -> usize {
        self.ships.iter().filter(|ps| !ps.ship().is_sunk()).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  grid: {:?},\n  ships: {:?}\n}}",
            self.grid, self.ships
        )
    }
}

/// Read-only view of an opponent's board.
///
/// Unhit ship segments read as [`Cell::Empty`], so strategies only learn
/// what their own shots revealed.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    grid: &'a Grid,
}

impl<'a> TargetView<'a> {
    /// Side length of the target board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Cell state as seen by the shooter.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        Ok(match self.grid.get(row, col)? {
            Cell::ShipPresent => Cell::Empty,
            cell => cell,
        })
    }

    /// Returns `true` if (row, col) has already been shot.
    pub fn is_resolved(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.grid.get(row, col)?.is_resolved())
    }

    /// Number of cells that have not been shot yet.
    pub fn unresolved_count(&self) -> usize {
        self.grid.iter().filter(|(_, _, c)| !c.is_resolved()).count()
    }

    /// Coordinates not yet shot, in row-major order.
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.grid
            .iter()
            .filter(|(_, _, c)| !c.is_resolved())
            .map(|(r, c, _)| (r, c))
    }
}
