//! Errors used by the [`OwnFleetGrid`] and [`TargetingGrid`].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why text could not be converted to a [`Coordinate`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ParseCoordinateError {
    /// Coordinates are exactly one letter and one digit.
    #[error("expected 2 characters, got {0}")]
    WrongLength(usize),
    /// The first character was not a row letter `A` through `J`.
    #[error("invalid row {0:?}, expected a letter from A to J")]
    InvalidRow(char),
    /// The second character was not a column digit `0` through `9`.
    #[error("invalid column {0:?}, expected a digit from 0 to 9")]
    InvalidColumn(char),
}

/// Reason why a vessel could not be placed between two endpoints.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The endpoints share neither a row nor a column.
    #[error("the endpoints are not on the same row or column")]
    NotStraight,
    /// The endpoints do not bound a run of exactly the vessel's length.
    #[error("the endpoints do not span the length of the vessel")]
    WrongLength,
    /// One or more of the cells between the endpoints was not empty.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a vessel in an invalid position.
#[derive(Error)]
#[error("could not place vessel of length {length} from {from} to {to}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    length: usize,
    from: Coordinate,
    to: Coordinate,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason, length and the requested endpoints.
    pub(super) fn new(
        reason: CannotPlaceReason,
        length: usize,
        from: Coordinate,
        to: Coordinate,
    ) -> Self {
        Self {
            reason,
            length,
            from,
            to,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The length of the vessel that was being placed.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The endpoints where placement was attempted.
    pub fn ends(&self) -> (Coordinate, Coordinate) {
        (self.from, self.to)
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// A shot has already been resolved at that cell.
    #[error("that cell was already attacked")]
    AlreadyAttacked,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
