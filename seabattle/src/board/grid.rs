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
//! Cell storage for the battlefield: which ship covers a cell and whether it was fired on.

use std::ops::{Index, IndexMut};

use crate::{
    board::{Coordinate, GridSize},
    ships::ShipId,
};

/// A single cell in the grid.
#[derive(Debug, Default, Clone)]
pub(super) struct GridCell {
    /// The ship that occupies this cell, if any.
    pub(super) ship: Option<ShipId>,

    /// Whether this cell has been fired upon.
    pub(super) fired: bool,
}

/// Row-major grid of cells.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this grid.
    pub(super) dim: GridSize,
    /// Cells that make up this grid.
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: GridSize) -> Self {
        let cells = (0..dim.total_size()).map(|_| GridCell::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut GridCell> {
        self.dim
            .try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Whether every coordinate is in bounds and unoccupied.
    pub(super) fn is_vacant(&self, coords: &[Coordinate]) -> bool {
        coords
            .iter()
            .all(|coord| matches!(self.get(coord), Some(cell) if cell.ship.is_none()))
    }
}

impl Index<&Coordinate> for Grid {
    type Output = GridCell;

    fn index(&self, coord: &Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<&Coordinate> for Grid {
    fn index_mut(&mut self, coord: &Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
