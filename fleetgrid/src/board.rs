//! Types that make up the game board.

use crate::ships::{Line, Vessel};

use self::grid::{Grid, GridCell};
pub use self::{
    coordinate::{row_letter, Coordinate},
    errors::{CannotPlaceReason, CannotShootReason, ParseCoordinateError, PlaceError, ShotError},
    target::{AttackOutcome, Mark, TargetingGrid},
};

mod coordinate;
mod errors;
mod grid;
mod target;

/// Width and height of every grid.
pub const GRID_SIZE: usize = 10;

/// State of a single cell on a player's own grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// No vessel and never attacked.
    Empty,
    /// A vessel occupies the cell and it has not been hit.
    Occupied,
    /// A vessel occupies the cell and it has been hit.
    Damaged,
    /// No vessel, and an attack has missed here.
    MissedAttack,
}

impl CellState {
    /// Character used to render this cell. Misses render the same as open water.
    pub fn display_char(self) -> char {
        match self {
            CellState::Empty | CellState::MissedAttack => '-',
            CellState::Occupied => 'O',
            CellState::Damaged => 'X',
        }
    }
}

/// A player's own grid: their vessels and the damage taken from the opponent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OwnFleetGrid {
    /// Grid of cells occupied by vessels.
    grid: Grid<GridCell>,

    /// Vessels placed on this grid. Cells refer to vessels by index in this list.
    vessels: Vec<Vessel>,
}

impl OwnFleetGrid {
    /// Create an empty grid with no vessels.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            vessels: Vec::new(),
        }
    }

    /// Get the state of the cell at the given coordinate.
    pub fn cell_state(&self, coord: Coordinate) -> CellState {
        self.grid[coord].state()
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the states
    /// of that row's cells.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = CellState>> {
        self.grid.rows().map(|row| row.map(|(_, cell)| cell.state()))
    }

    /// All vessels placed on this grid, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Get the vessel occupying the given cell, if any.
    pub fn get_vessel(&self, coord: Coordinate) -> Option<&Vessel> {
        self.vessel_id(coord).map(|id| &self.vessels[id])
    }

    /// Get the index in [`vessels`][Self::vessels] of the vessel occupying the given
    /// cell, if any.
    pub fn vessel_id(&self, coord: Coordinate) -> Option<usize> {
        self.grid[coord].vessel
    }

    /// Returns true if at least one vessel was placed and every vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Number of vessels still afloat.
    pub fn remaining(&self) -> usize {
        self.vessels.iter().filter(|vessel| !vessel.is_sunk()).count()
    }

    /// Place a vessel of the given length between two endpoints. The endpoints must
    /// bound a straight run of exactly `length` empty cells. Nothing changes if
    /// placement fails.
    pub fn place_vessel(
        &mut self,
        length: usize,
        end1: Coordinate,
        end2: Coordinate,
    ) -> Result<&Vessel, PlaceError> {
        let run = Line::new(length).between(end1, end2).map_err(|reason| {
            log::trace!("rejected {}-{} for length {}: {}", end1, end2, length, reason);
            PlaceError::new(reason, length, end1, end2)
        })?;
        if let Some(taken) = run
            .iter()
            .find(|&&coord| self.grid[coord].state() != CellState::Empty)
        {
            log::trace!("rejected {}-{}: {} is not empty", end1, end2, taken);
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                length,
                end1,
                end2,
            ));
        }
        let vessel = match Vessel::new(length, run) {
            Ok(vessel) => vessel,
            // Line always yields `length` distinct cells.
            Err(err) => unreachable!("{}", err),
        };
        let id = self.vessels.len();
        for &coord in vessel.cells() {
            self.grid[coord].vessel = Some(id);
        }
        log::debug!("placed vessel {} of length {} at {}-{}", id, length, end1, end2);
        self.vessels.push(vessel);
        Ok(&self.vessels[id])
    }

    /// Place a vessel of the given length on a uniformly random free straight run.
    /// Returns `None` if no such run is left.
    #[cfg(feature = "rng_gen")]
    pub fn place_random<R: rand::Rng + ?Sized>(
        &mut self,
        length: usize,
        rng: &mut R,
    ) -> Option<&Vessel> {
        use rand::seq::SliceRandom;

        use crate::ships::Orientation;

        let line = Line::new(length);
        let candidates: Vec<(Coordinate, Coordinate)> = Coordinate::all()
            .flat_map(|start| {
                Orientation::ALL
                    .iter()
                    .filter_map(move |&dir| line.end_from(start, dir).map(|end| (start, end)))
            })
            .filter(|&(start, end)| match line.between(start, end) {
                Ok(run) => run
                    .iter()
                    .all(|&coord| self.cell_state(coord) == CellState::Empty),
                Err(_) => false,
            })
            .collect();
        let &(start, end) = candidates.choose(rng)?;
        self.place_vessel(length, start, end).ok()
    }

    /// Resolve an incoming attack. Returns `Ok(true)` if a vessel was hit and
    /// `Ok(false)` on a miss. A cell can only be attacked once.
    pub fn hit(&mut self, coord: Coordinate) -> Result<bool, ShotError> {
        let cell = &mut self.grid[coord];
        if cell.hit {
            log::trace!("refused repeat attack at {}", coord);
            return Err(ShotError::new(CannotShootReason::AlreadyAttacked, coord));
        }
        cell.hit = true;
        match cell.vessel {
            None => {
                log::debug!("attack at {} missed", coord);
                Ok(false)
            }
            Some(id) => {
                let vessel = &mut self.vessels[id];
                vessel.register_hit();
                log::debug!(
                    "attack at {} hit vessel {} ({}/{})",
                    coord,
                    id,
                    vessel.hits(),
                    vessel.len()
                );
                Ok(true)
            }
        }
    }
}

impl Default for OwnFleetGrid {
    fn default() -> Self {
        Self::new()
    }
}
