//! A player's record of the shots they have fired at their opponent.
use crate::board::{CannotShootReason, Coordinate, Grid, OwnFleetGrid, ShotError};

/// What a player knows about one cell of their opponent's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mark {
    /// Not attacked yet.
    Unknown,
    /// Attacked, and a vessel was hit.
    Hit,
    /// Attacked, and nothing was there.
    Miss,
}

impl Mark {
    /// Character used to render this mark.
    pub fn display_char(self) -> char {
        match self {
            Mark::Unknown => 'O',
            Mark::Hit => 'X',
            Mark::Miss => '-',
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Unknown
    }
}

/// Result of an accepted attack.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a vessel but did not sink it.
    Hit,
    /// The shot hit a vessel and sank it.
    Sunk,
}

/// One player's view of their opponent's fleet.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TargetingGrid {
    grid: Grid<Mark>,
}

impl TargetingGrid {
    /// Create a grid where every cell is [`Mark::Unknown`].
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Get the mark at the given coordinate.
    pub fn mark(&self, coord: Coordinate) -> Mark {
        self.grid[coord]
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the marks of
    /// that row.
    pub fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Mark>> {
        self.grid.rows().map(|row| row.map(|(_, mark)| *mark))
    }

    /// Number of cells attacked so far.
    pub fn shots_fired(&self) -> usize {
        self.grid
            .iter()
            .filter(|&&mark| mark != Mark::Unknown)
            .count()
    }

    /// Fire at `coord` on the opponent's grid and record the result. Cells already
    /// attacked from this grid are refused without touching the opponent.
    pub fn attack(
        &mut self,
        coord: Coordinate,
        opponent: &mut OwnFleetGrid,
    ) -> Result<AttackOutcome, ShotError> {
        if self.grid[coord] != Mark::Unknown {
            log::trace!("{} already marked {:?}", coord, self.grid[coord]);
            return Err(ShotError::new(CannotShootReason::AlreadyAttacked, coord));
        }
        if opponent.hit(coord)? {
            self.grid[coord] = Mark::Hit;
            match opponent.get_vessel(coord) {
                Some(vessel) if vessel.is_sunk() => Ok(AttackOutcome::Sunk),
                Some(_) => Ok(AttackOutcome::Hit),
                None => unreachable!("hit reported at {} with no vessel", coord),
            }
        } else {
            self.grid[coord] = Mark::Miss;
            Ok(AttackOutcome::Miss)
        }
    }
}

impl Default for TargetingGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    #[test]
    fn records_hits_and_misses() {
        let mut fleet = OwnFleetGrid::new();
        fleet.place_vessel(2, c("B1"), c("B2")).unwrap();
        let mut targets = TargetingGrid::new();

        assert_eq!(targets.attack(c("A0"), &mut fleet), Ok(AttackOutcome::Miss));
        assert_eq!(targets.mark(c("A0")), Mark::Miss);
        assert_eq!(targets.attack(c("B1"), &mut fleet), Ok(AttackOutcome::Hit));
        assert_eq!(targets.mark(c("B1")), Mark::Hit);
        assert_eq!(targets.attack(c("B2"), &mut fleet), Ok(AttackOutcome::Sunk));
        assert_eq!(targets.shots_fired(), 3);
        assert!(fleet.all_sunk());
    }

    #[test]
    fn second_attack_is_rejected_regardless_of_opponent() {
        let mut fleet = OwnFleetGrid::new();
        fleet.place_vessel(2, c("B1"), c("B2")).unwrap();
        let mut targets = TargetingGrid::new();
        targets.attack(c("B1"), &mut fleet).unwrap();
        targets.attack(c("C1"), &mut fleet).unwrap();

        // A fresh opponent grid has never been attacked, but the gate still refuses.
        let mut fresh = OwnFleetGrid::new();
        for text in &["B1", "C1"] {
            let err = targets.attack(c(text), &mut fresh).unwrap_err();
            assert_eq!(err.reason(), CannotShootReason::AlreadyAttacked);
            assert_eq!(fresh.cell_state(c(text)), crate::board::CellState::Empty);
        }
        assert_eq!(fleet.vessels()[0].hits(), 1);
    }

    #[test]
    fn unmarked_cell_already_hit_on_opponent_is_not_recorded() {
        let mut fleet = OwnFleetGrid::new();
        fleet.hit(c("D4")).unwrap();
        let mut targets = TargetingGrid::new();
        assert!(targets.attack(c("D4"), &mut fleet).is_err());
        assert_eq!(targets.mark(c("D4")), Mark::Unknown);
    }

    #[test]
    fn display_chars() {
        assert_eq!(Mark::Unknown.display_char(), 'O');
        assert_eq!(Mark::Hit.display_char(), 'X');
        assert_eq!(Mark::Miss.display_char(), '-');
        let targets = TargetingGrid::new();
        assert!(targets.rows().flatten().all(|mark| mark == Mark::Unknown));
    }
}
