//! Implementation of the game as a whole: two players taking turns on the standard 10x10
//! grid with one of each ship from the standard fleet.
//!
//! The game never reads input or prints anything. Every operation returns a result the
//! caller can show to the player before asking again.
use std::fmt;

use crate::{
    board::{AttackOutcome, Coordinate, OwnFleetGrid, TargetingGrid},
    ships::Ship,
};

pub use self::errors::{NotReadyError, PlacementError, TurnError};

mod errors;

/// Player ID. Either `One` or `Two`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: &'static [Player] = &[Player::One, Player::Two];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The player's number as shown to people, `1` or `2`.
    pub fn number(self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::One
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One player's side of the game: their own fleet and their record of shots at the
/// opponent.
#[derive(Debug, Clone, Default)]
pub struct Contestant {
    fleet: OwnFleetGrid,
    targets: TargetingGrid,
    /// Ships placed so far. The n-th entry is the n-th vessel of `fleet`.
    placed: Vec<Ship>,
}

impl Contestant {
    /// This player's own grid.
    pub fn fleet(&self) -> &OwnFleetGrid {
        &self.fleet
    }

    /// This player's record of shots at the opponent.
    pub fn targets(&self) -> &TargetingGrid {
        &self.targets
    }

    /// Ships of the standard fleet that still need to be placed, in placement order.
    pub fn pending_ships(&self) -> impl '_ + Iterator<Item = Ship> {
        Ship::ALL
            .iter()
            .copied()
            .filter(move |ship| !self.placed.contains(ship))
    }

    /// Returns true once the whole standard fleet is placed.
    pub fn is_ready(&self) -> bool {
        self.pending_ships().next().is_none()
    }

    /// Get the ship occupying the given cell of this player's grid, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<Ship> {
        self.fleet.vessel_id(coord).map(|id| self.placed[id])
    }

    /// Returns true once every ship of this player is sunk.
    pub fn has_lost(&self) -> bool {
        self.fleet.all_sunk()
    }
}

/// Outcome of a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnOutcome {
    /// Nothing was hit.
    Miss,
    /// The given ship was hit but it was not sunk.
    Hit(Ship),
    /// The given ship was hit and it was sunk but the target player still had other ships.
    Sunk(Ship),
    /// The given ship was hit and sunk, and the target player has no remaining ships.
    Victory(Ship),
}

/// A two-player game. Ships are placed first, then [`start`][Game::start] begins the
/// battle and players alternate shots until one fleet is sunk.
#[derive(Debug, Clone, Default)]
pub struct Game {
    contestants: [Contestant; 2],
    /// Player whose turn it currently is.
    current: Player,
    started: bool,
    winner: Option<Player>,
}

impl Game {
    /// Create a game with two empty grids, in the placement phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the given player's side of the game.
    pub fn contestant(&self, player: Player) -> &Contestant {
        match player {
            Player::One => &self.contestants[0],
            Player::Two => &self.contestants[1],
        }
    }

    /// Get the player whose turn it currently is.
    pub fn current(&self) -> Player {
        self.current
    }

    /// Returns true once the battle phase has begun.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Get the winner, or `None` if the game is still in progress.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Get the ships the given player still needs to place.
    pub fn pending_ships(&self, player: Player) -> impl '_ + Iterator<Item = Ship> {
        self.contestant(player).pending_ships()
    }

    /// Try to place the given ship for the given player between two endpoints.
    pub fn place_ship(
        &mut self,
        player: Player,
        ship: Ship,
        end1: Coordinate,
        end2: Coordinate,
    ) -> Result<(), PlacementError> {
        if self.started {
            return Err(PlacementError::GameStarted);
        }
        let contestant = self.contestant_mut(player);
        if contestant.placed.contains(&ship) {
            return Err(PlacementError::AlreadyPlaced(ship));
        }
        contestant.fleet.place_vessel(ship.len(), end1, end2)?;
        contestant.placed.push(ship);
        log::info!("player {} placed their {}", player.number(), ship);
        Ok(())
    }

    /// Randomly place every ship the given player has not placed yet.
    #[cfg(feature = "rng_gen")]
    pub fn place_remaining_random<R: rand::Rng + ?Sized>(
        &mut self,
        player: Player,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        if self.started {
            return Err(PlacementError::GameStarted);
        }
        let contestant = self.contestant_mut(player);
        let pending: Vec<Ship> = contestant.pending_ships().collect();
        for ship in pending {
            contestant
                .fleet
                .place_random(ship.len(), rng)
                .ok_or(PlacementError::NoRoom(ship))?;
            contestant.placed.push(ship);
            log::info!("player {} placed their {} at random", player.number(), ship);
        }
        Ok(())
    }

    /// Begin the battle. Fails if either player still has ships to place.
    pub fn start(&mut self) -> Result<(), NotReadyError> {
        if let Some(&player) = Player::ALL
            .iter()
            .find(|&&player| !self.contestant(player).is_ready())
        {
            return Err(NotReadyError(player));
        }
        self.started = true;
        log::info!("battle started, player {} fires first", self.current.number());
        Ok(())
    }

    /// Fire the current player's shot at the opponent. The turn passes to the opponent
    /// after any accepted shot unless it wins the game.
    pub fn attack(&mut self, coord: Coordinate) -> Result<TurnOutcome, TurnError> {
        if !self.started {
            return Err(TurnError::NotStarted);
        }
        if self.winner.is_some() {
            return Err(TurnError::AlreadyOver);
        }
        let attacker = self.current;
        let (own, other) = self.split_mut(attacker);
        let outcome = match own.targets.attack(coord, &mut other.fleet)? {
            AttackOutcome::Miss => TurnOutcome::Miss,
            outcome => {
                // Only placed ships occupy cells.
                let ship = match other.ship_at(coord) {
                    Some(ship) => ship,
                    None => unreachable!("hit at {} has no ship", coord),
                };
                match outcome {
                    AttackOutcome::Sunk if other.has_lost() => TurnOutcome::Victory(ship),
                    AttackOutcome::Sunk => TurnOutcome::Sunk(ship),
                    _ => TurnOutcome::Hit(ship),
                }
            }
        };
        log::info!(
            "player {} fired at {}: {:?}",
            attacker.number(),
            coord,
            outcome
        );
        if let TurnOutcome::Victory(_) = outcome {
            self.winner = Some(attacker);
        } else {
            self.current = attacker.opponent();
        }
        Ok(outcome)
    }

    fn contestant_mut(&mut self, player: Player) -> &mut Contestant {
        self.split_mut(player).0
    }

    /// Borrow the given player's side and their opponent's side at the same time.
    fn split_mut(&mut self, player: Player) -> (&mut Contestant, &mut Contestant) {
        let [one, two] = &mut self.contestants;
        match player {
            Player::One => (one, two),
            Player::Two => (two, one),
        }
    }
}
