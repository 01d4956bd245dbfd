//! A fixed-size square grid of cell states.
//!
//! The grid owns no game rules: it stores one [`Cell`] per coordinate,
//! bounds-checks every access and answers bulk queries. Legal transitions
//! are enforced by [`Board`](crate::Board).

use alloc::vec::Vec;
use core::fmt;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water that has not been shot.
    Empty,
    /// An unhit ship segment.
    ShipPresent,
    /// A ship segment that has been shot.
    Hit,
    /// Open water that has been shot.
    Miss,
}

impl Cell {
    /// Returns `true` once a shot has landed on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Errors returned by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside `[0, size)`.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl core::error::Error for GridError {}

/// An `N×N` matrix of [`Cell`]s stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `size × size` empty cells.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: alloc::vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `(row, col)` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Reads the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrites the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of cells currently in `state`.
    pub fn count_cells_with_state(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Iterates over every cell as `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / n, i % n, cell))
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.size + col)
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.size, self.size)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipPresent => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.count_cells_with_state(Cell::Empty), 16);
        assert_eq!(grid.count_cells_with_state(Cell::ShipPresent), 0);
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut grid = Grid::new(3);
        grid.set(2, 1, Cell::Miss).unwrap();
        assert_eq!(grid.get(2, 1).unwrap(), Cell::Miss);
        assert_eq!(
            grid.get(3, 0).unwrap_err(),
            GridError::OutOfBounds { row: 3, col: 0 }
        );
        assert_eq!(
            grid.set(0, 3, Cell::Hit).unwrap_err(),
            GridError::OutOfBounds { row: 0, col: 3 }
        );
        assert_eq!(grid.count_cells_with_state(Cell::Hit), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let mut grid = Grid::new(2);
        grid.set(1, 0, Cell::ShipPresent).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            alloc::vec![
                (0, 0, Cell::Empty),
                (0, 1, Cell::Empty),
                (1, 0, Cell::ShipPresent),
                (1, 1, Cell::Empty),
            ]
        );
    }
}
