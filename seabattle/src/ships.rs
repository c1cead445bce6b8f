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
//! Types used for defining ships and their placements.
use std::{fmt::Debug, hash::Hash};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

pub use self::{class::ShipClass, line::project};

mod class;
mod line;

/// Trait for the kinds of ship that make up a fleet. A kind only carries a name and a
/// length; which kinds exist and how long they are is up to the caller.
pub trait ShipKind: Debug + Clone + Eq + Hash {
    /// Number of cells a ship of this kind occupies. Kinds of length 0 are rejected by
    /// placement.
    fn len(&self) -> usize;

    /// Human readable name of this kind.
    fn name(&self) -> &str;
}

/// Projection of a ship onto the grid: the cells it occupies, bow first.
pub type ShapeProjection = Vec<Coordinate>;

/// Axis a ship extends along from its bow.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Extends towards increasing `x`.
    Horizontal,
    /// Extends towards increasing `y`.
    Vertical,
}

impl Orientation {
    pub(crate) fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

impl Distribution<Orientation> for Standard {
    /// Both orientations are equally likely.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Index of a ship within its battlefield, assigned in placement order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    /// Position of the ship in placement order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship placed on the grid. Everything but the hit counter is fixed at placement.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship<K> {
    kind: K,
    orientation: Orientation,
    cells: ShapeProjection,
    hits: usize,
}

impl<K: ShipKind> Ship<K> {
    /// Build an unhit ship from an already validated projection.
    pub(crate) fn new(kind: K, orientation: Orientation, cells: ShapeProjection) -> Self {
        debug_assert_eq!(cells.len(), kind.len());
        Self {
            kind,
            orientation,
            cells,
            hits: 0,
        }
    }

    /// Kind of this ship.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Axis the ship extends along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The anchor cell the rest of the ship extends from.
    pub fn bow(&self) -> Coordinate {
        // Ship kinds are never empty, so there is always a bow.
        self.cells[0]
    }

    /// Cells occupied by the ship, bow first.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Check if the ship occupies the given cell.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.cells.contains(coord)
    }

    /// Number of distinct cells of this ship that have been hit.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A ship is sunk once every one of its cells has been hit.
    pub fn sunk(&self) -> bool {
        self.hits == self.len()
    }

    /// Whether the ship still has unhit cells.
    pub fn afloat(&self) -> bool {
        self.hits < self.len()
    }

    /// Register a hit on a previously unhit cell.
    pub(crate) fn register_hit(&mut self) {
        debug_assert!(self.afloat());
        if self.afloat() {
            self.hits += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn patrol() -> Ship<ShipClass> {
        let kind = ShipClass::new("Patrol", 2);
        let cells = project(Coordinate::new(1, 1), Orientation::Vertical, 2).unwrap();
        Ship::new(kind, Orientation::Vertical, cells)
    }

    #[test]
    fn ship_sinks_after_every_cell_is_hit() {
        let mut ship = patrol();
        assert_eq!(ship.bow(), Coordinate::new(1, 1));
        assert!(ship.afloat());
        ship.register_hit();
        assert!(!ship.sunk());
        ship.register_hit();
        assert!(ship.sunk());
        assert!(!ship.afloat());
        assert_eq!(ship.hits(), 2);
    }

    #[test]
    fn orientations_are_both_sampled() {
        let mut rng = StdRng::seed_from_u64(1);
        let horizontal = (0..1000)
            .map(|_| rng.gen::<Orientation>())
            .filter(|o| o.is_horizontal())
            .count();
        assert!(horizontal > 400 && horizontal < 600, "{}", horizontal);
    }
}
