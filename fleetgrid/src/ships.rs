//! Types used for defining ships and their shapes.
use std::{collections::HashSet, fmt};

use thiserror::Error;

use crate::board::Coordinate;

pub use self::linear::{Line, Orientation};

mod linear;

/// Error returned when a [`Vessel`] is built from a cell set that doesn't match its
/// length.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("vessel of length {length} cannot occupy {cells} distinct cells")]
pub struct VesselError {
    /// Length requested for the vessel.
    length: usize,
    /// Number of distinct cells that were provided.
    cells: usize,
}

impl VesselError {
    /// Length requested for the vessel.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct cells that were provided.
    pub fn cells(&self) -> usize {
        self.cells
    }
}

/// A ship placed on a grid. The cells it occupies are fixed when it is created; only the
/// hit count changes afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Vessel {
    /// Cells occupied by this vessel.
    cells: Vec<Coordinate>,

    /// Number of hits registered against this vessel. Never exceeds the length.
    hits: usize,
}

impl Vessel {
    /// Create a vessel of the given length over the given cells. Fails if the cells are
    /// not exactly `length` distinct coordinates.
    pub fn new(length: usize, cells: Vec<Coordinate>) -> Result<Self, VesselError> {
        let distinct = cells.iter().collect::<HashSet<_>>().len();
        if distinct != length || cells.len() != length {
            Err(VesselError {
                length,
                cells: distinct,
            })
        } else {
            Ok(Self { cells, hits: 0 })
        }
    }

    /// Get the length of this vessel.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of hits taken so far.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// The cells this vessel occupies.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Record one hit on this vessel. Saturates at the vessel's length.
    pub fn register_hit(&mut self) {
        if self.hits < self.len() {
            self.hits += 1;
        }
    }

    /// Returns true once every cell of this vessel has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.len()
    }

    /// Returns true if this vessel occupies the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }
}

/// Ships of the standard fleet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ship {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl Ship {
    /// Every ship of the standard fleet, in placement order.
    pub const ALL: &'static [Ship] = &[
        Ship::Carrier,
        Ship::Battleship,
        Ship::Cruiser,
        Ship::Submarine,
        Ship::Destroyer,
    ];

    /// Get the shape cooresponding to this ship.
    pub fn shape(self) -> Line {
        Line::new(self.len())
    }

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            Ship::Carrier => 5,
            Ship::Battleship => 4,
            Ship::Cruiser => 3,
            Ship::Submarine => 3,
            Ship::Destroyer => 2,
        }
    }

    /// Lower-case name of this ship.
    pub fn name(self) -> &'static str {
        match self {
            Ship::Carrier => "carrier",
            Ship::Battleship => "battleship",
            Ship::Cruiser => "cruiser",
            Ship::Submarine => "submarine",
            Ship::Destroyer => "destroyer",
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}
