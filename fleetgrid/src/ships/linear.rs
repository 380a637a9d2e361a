// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::cmp;

use crate::board::{CannotPlaceReason, Coordinate};

/// Direction a run of cells extends in from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Every orientation.
    pub const ALL: &'static [Orientation] = &[
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    /// Step `distance` cells from `coord` in this direction. Returns `None` if that
    /// leaves the grid.
    fn step(self, coord: Coordinate, distance: usize) -> Option<Coordinate> {
        let (row, col): (usize, usize) = coord.into();
        match self {
            Orientation::Up => row
                .checked_sub(distance)
                .and_then(|row| Coordinate::try_new(row, col)),
            Orientation::Down => row
                .checked_add(distance)
                .and_then(|row| Coordinate::try_new(row, col)),
            Orientation::Left => col
                .checked_sub(distance)
                .and_then(|col| Coordinate::try_new(row, col)),
            Orientation::Right => col
                .checked_add(distance)
                .and_then(|col| Coordinate::try_new(row, col)),
        }
    }
}

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear shape with the specified length.
    pub fn new(len: usize) -> Self {
        Line(len)
    }

    /// Get the length of this shape.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Compute the cells of this line between two endpoints, inclusive. The endpoints
    /// may be given in either order but must share a row or column and be exactly
    /// `len - 1` cells apart.
    pub fn between(
        &self,
        end1: Coordinate,
        end2: Coordinate,
    ) -> Result<Vec<Coordinate>, CannotPlaceReason> {
        let span = self
            .len()
            .checked_sub(1)
            .ok_or(CannotPlaceReason::WrongLength)?;
        let (r1, c1): (usize, usize) = end1.into();
        let (r2, c2): (usize, usize) = end2.into();
        if r1 == r2 {
            let (lo, hi) = (cmp::min(c1, c2), cmp::max(c1, c2));
            if hi - lo != span {
                return Err(CannotPlaceReason::WrongLength);
            }
            Ok((lo..=hi).map(|col| Coordinate::new(r1, col)).collect())
        } else if c1 == c2 {
            let (lo, hi) = (cmp::min(r1, r2), cmp::max(r1, r2));
            if hi - lo != span {
                return Err(CannotPlaceReason::WrongLength);
            }
            Ok((lo..=hi).map(|row| Coordinate::new(row, c1)).collect())
        } else {
            Err(CannotPlaceReason::NotStraight)
        }
    }

    /// Get the far endpoint of this line when it starts at `start` and extends in
    /// direction `dir`. Returns `None` if the line would not fit on the grid or has
    /// zero length.
    pub fn end_from(&self, start: Coordinate, dir: Orientation) -> Option<Coordinate> {
        self.len()
            .checked_sub(1)
            .and_then(|span| dir.step(start, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(text: &str) -> Coordinate {
        text.parse().unwrap()
    }

    #[test]
    fn horizontal_run_in_either_order() {
        let expected = vec![c("A0"), c("A1"), c("A2"), c("A3"), c("A4")];
        assert_eq!(Line::new(5).between(c("A0"), c("A4")), Ok(expected.clone()));
        assert_eq!(Line::new(5).between(c("A4"), c("A0")), Ok(expected));
    }

    #[test]
    fn vertical_run() {
        assert_eq!(
            Line::new(3).between(c("D0"), c("B0")),
            Ok(vec![c("B0"), c("C0"), c("D0")])
        );
    }

    #[test]
    fn rejects_diagonal() {
        assert_eq!(
            Line::new(2).between(c("A0"), c("B1")),
            Err(CannotPlaceReason::NotStraight)
        );
    }

    #[test]
    fn rejects_wrong_span() {
        assert_eq!(
            Line::new(4).between(c("A0"), c("A4")),
            Err(CannotPlaceReason::WrongLength)
        );
        assert_eq!(
            Line::new(3).between(c("A0"), c("A1")),
            Err(CannotPlaceReason::WrongLength)
        );
        assert_eq!(
            Line::new(0).between(c("A0"), c("A0")),
            Err(CannotPlaceReason::WrongLength)
        );
    }

    #[test]
    fn single_cell_line() {
        assert_eq!(Line::new(1).between(c("E5"), c("E5")), Ok(vec![c("E5")]));
        assert_eq!(Line::new(1).end_from(c("E5"), Orientation::Up), Some(c("E5")));
    }

    #[test]
    fn end_from_respects_bounds() {
        let line = Line::new(3);
        assert_eq!(line.end_from(c("C3"), Orientation::Up), Some(c("A3")));
        assert_eq!(line.end_from(c("C3"), Orientation::Down), Some(c("E3")));
        assert_eq!(line.end_from(c("C3"), Orientation::Left), Some(c("C1")));
        assert_eq!(line.end_from(c("C3"), Orientation::Right), Some(c("C5")));
        assert_eq!(line.end_from(c("B0"), Orientation::Up), None);
        assert_eq!(line.end_from(c("J8"), Orientation::Right), None);
        assert_eq!(Line::new(0).end_from(c("B0"), Orientation::Up), None);
    }

    #[test]
    fn end_from_agrees_with_between() {
        let line = Line::new(4);
        for start in Coordinate::all() {
            for &dir in Orientation::ALL.iter() {
                if let Some(end) = line.end_from(start, dir) {
                    let run = line.between(start, end).unwrap();
                    assert_eq!(run.len(), 4);
                    assert!(run.contains(&start) && run.contains(&end));
                }
            }
        }
    }
}
