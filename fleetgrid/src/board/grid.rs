//! Defines the types that make up the grid. These are shared between the fleet and
//! targeting grids.

use std::ops::{Index, IndexMut};

use crate::board::{CellState, Coordinate, GRID_SIZE};

/// A single cell in the player's own grid.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub(super) struct GridCell {
    /// Index of the vessel that occupies this cell, if any.
    pub(super) vessel: Option<usize>,

    /// Whether this cell has been hit previously or not.
    pub(super) hit: bool,
}

impl GridCell {
    /// The state of this cell as seen by its owner.
    pub(super) fn state(&self) -> CellState {
        match (self.vessel, self.hit) {
            (None, false) => CellState::Empty,
            (None, true) => CellState::MissedAttack,
            (Some(_), false) => CellState::Occupied,
            (Some(_), true) => CellState::Damaged,
        }
    }
}

/// Fixed-size grid storage shared by [`OwnFleetGrid`] and [`TargetingGrid`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid<T> {
    /// Cells that make up this grid, in row-major order.
    cells: Box<[T]>,
}

impl<T: Default> Grid<T> {
    pub(super) fn new() -> Self {
        let cells = (0..GRID_SIZE * GRID_SIZE).map(|_| Default::default()).collect();
        Self { cells }
    }
}

impl<T> Grid<T> {
    /// Get an iterator over the rows of this grid. Each row is an iterator over the
    /// coordinates and cells of that row.
    pub(super) fn rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Coordinate, &T)>> {
        self.cells.chunks(GRID_SIZE).enumerate().map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coordinate::new(row, col), cell))
        })
    }

    /// Get an iterator over all cells in row-major order.
    pub(super) fn iter(&self) -> impl '_ + Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.cells[coord.linearize()]
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        &mut self.cells[coord.linearize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_state_follows_vessel_and_hit() {
        let mut cell = GridCell::default();
        assert_eq!(cell.state(), CellState::Empty);
        cell.hit = true;
        assert_eq!(cell.state(), CellState::MissedAttack);
        let mut cell = GridCell {
            vessel: Some(0),
            hit: false,
        };
        assert_eq!(cell.state(), CellState::Occupied);
        cell.hit = true;
        assert_eq!(cell.state(), CellState::Damaged);
    }

    #[test]
    fn rows_cover_grid_in_order() {
        let grid: Grid<u8> = Grid::new();
        let rows: Vec<Vec<Coordinate>> = grid
            .rows()
            .map(|row| row.map(|(coord, _)| coord).collect())
            .collect();
        assert_eq!(rows.len(), GRID_SIZE);
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), GRID_SIZE);
            for (c, coord) in row.iter().enumerate() {
                assert_eq!(*coord, Coordinate::new(r, c));
            }
        }
    }

    #[test]
    fn index_by_coordinate() {
        let mut grid: Grid<u8> = Grid::new();
        grid[Coordinate::new(3, 4)] = 7;
        assert_eq!(grid[Coordinate::new(3, 4)], 7);
        assert_eq!(grid.iter().filter(|&&v| v == 7).count(), 1);
        assert_eq!(grid.iter().nth(34), Some(&7));
    }
}
