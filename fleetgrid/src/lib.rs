//! Two-player Battleship on a fixed 10x10 grid.
//!
//! [`board`] holds the grids: each player's [`OwnFleetGrid`][board::OwnFleetGrid] with
//! their vessels and the damage they have taken, and their
//! [`TargetingGrid`][board::TargetingGrid] recording shots at the opponent. [`ships`]
//! defines vessels and the standard fleet. [`game`] sequences placement and turns for two
//! players.
//!
//! Nothing here reads input or prints. Rejected moves come back as errors for the caller
//! to report before asking again.
//!
//! The `rng_gen` feature adds random ship placement.

pub mod board;
pub mod game;
pub mod ships;
