use thiserror::Error;

use crate::{
    board::{PlaceError, ShotError},
    game::Player,
    ships::Ship,
};

/// Reason why a ship could not be placed during setup.
#[derive(Debug, Error)]
pub enum PlacementError {
    /// Ships cannot move once the battle has begun.
    #[error("the battle has already started")]
    GameStarted,
    /// The ship is already on the board.
    #[error("the {0} was already placed")]
    AlreadyPlaced(Ship),
    /// Random placement found no free run of cells for the ship.
    #[error("no room left for the {0}")]
    NoRoom(Ship),
    /// The position was rejected by the grid.
    #[error(transparent)]
    Invalid(#[from] PlaceError),
}

/// Error returned when trying to start the battle before the fleets are complete.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("player {0} has not placed all of their ships")]
pub struct NotReadyError(pub Player);

/// Reason why a turn could not be taken.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// Ships are still being placed.
    #[error("the battle has not started")]
    NotStarted,
    /// A winner has already been decided.
    #[error("the game is already over")]
    AlreadyOver,
    /// The target cell was refused.
    #[error(transparent)]
    Shot(#[from] ShotError),
}
