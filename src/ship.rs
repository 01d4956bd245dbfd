//! Ship damage tracking and placement geometry.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, increasing column.
    Horizontal,
    /// Extends along the column, increasing row.
    Vertical,
}

/// A ship's length and damage counter.
///
/// Length is fixed at construction; only the hit counter changes, and only
/// through [`Board::resolve_shot`](crate::Board::resolve_shot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    /// Create an undamaged ship.
    pub const fn new(length: usize) -> Self {
        Self { length, hits: 0 }
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Segments still afloat.
    pub fn remaining(&self) -> usize {
        self.length - self.hits
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }
}

/// A ship recorded on a board together with the cells it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    ship: Ship,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl PlacedShip {
    pub(crate) fn new(ship: Ship, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            ship,
            row,
            col,
            orientation,
        }
    }

    /// Damage state of the ship.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub(crate) fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        run_cells(self.row, self.col, self.orientation, self.ship.length)
    }

    /// Returns `true` if the ship covers (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let len = self.ship.length;
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col - self.col < len,
            Orientation::Vertical => col == self.col && row >= self.row && row - self.row < len,
        }
    }
}

/// The `length` cells starting at (row, col) along `orientation`.
pub(crate) fn run_cells(
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (row, col + i),
        Orientation::Vertical => (row + i, col),
    })
}
