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
//! Cell coordinates on the battlefield.
use std::fmt;

/// The coordinates of a cell on the battlefield. `x` is the column and `y` is the row,
/// both counted from zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Get the coordinate `steps` cells further along the given axis. Returns `None` only
    /// on arithmetic overflow; the result is not bounds checked.
    pub(crate) fn offset(self, horizontal: bool, steps: usize) -> Option<Self> {
        if horizontal {
            self.x.checked_add(steps).map(|x| Self::new(x, self.y))
        } else {
            self.y.checked_add(steps).map(|y| Self::new(self.x, y))
        }
    }

    /// The coordinate as the signed pair accepted by the battlefield's shot operations.
    /// Coordinates on a grid are far below `i64::max_value()`.
    pub(crate) fn signed(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
