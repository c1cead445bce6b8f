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
//! The battlefield: a square grid, the ships placed on it, and the cells fired upon.
//!
//! All mutation goes through placement and [`Battlefield::hit`]. Per-cell states
//! ([`CellState`]) and ship status are projections of the stored fired cells and ship hit
//! counters, recomputed on every query.

use std::ops::Deref;

use log::{debug, info};
use rand::Rng;

use crate::{
    placement,
    ships::{Orientation, Ship, ShipId, ShipKind},
};

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::GridSize,
    errors::{CannotPlaceReason, InvalidCoordinate, PlaceError, PlacementExhausted},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Handle to a ship on the battlefield. Derefs to the [`Ship`] for its status.
#[derive(Debug)]
pub struct ShipRef<'a, K> {
    /// ID of the ship.
    id: ShipId,

    /// The ship itself.
    ship: &'a Ship<K>,
}

impl<'a, K> ShipRef<'a, K> {
    /// Get the ID of the ship. Two handles refer to the same ship iff their IDs are equal.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Get the underlying ship with the lifetime of the battlefield borrow.
    pub fn ship(&self) -> &'a Ship<K> {
        self.ship
    }
}

impl<K> Deref for ShipRef<'_, K> {
    type Target = Ship<K>;

    fn deref(&self) -> &Self::Target {
        self.ship
    }
}

// Derive for Copy/Clone include bounds on the generic parameters, however, we can
// implement copy and clone regardless of whether our generics do.
impl<K> Clone for ShipRef<'_, K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            ship: self.ship,
        }
    }
}
impl<K> Copy for ShipRef<'_, K> {}

/// What a caller may observe about a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Not fired upon yet.
    Untouched,
    /// Fired upon, and no ship occupies it.
    Miss,
    /// Fired upon and occupied by a ship that is still afloat.
    HitAfloat,
    /// Fired upon and occupied by a ship that has been sunk.
    HitSunk,
}

/// Reference to a particular cell in the grid, for renderers.
#[derive(Debug)]
pub struct CellRef<'a, K> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was fired upon.
    fired: bool,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<ShipRef<'a, K>>,
}

impl<'a, K: ShipKind> CellRef<'a, K> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been fired upon.
    pub fn fired(&self) -> bool {
        self.fired
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<ShipRef<'a, K>> {
        self.ship
    }

    /// Derived state of this cell.
    pub fn state(&self) -> CellState {
        match self.ship {
            _ if !self.fired => CellState::Untouched,
            None => CellState::Miss,
            Some(ship) if ship.sunk() => CellState::HitSunk,
            Some(_) => CellState::HitAfloat,
        }
    }
}

impl<K> Clone for CellRef<'_, K> {
    fn clone(&self) -> Self {
        Self {
            coord: self.coord,
            fired: self.fired,
            ship: self.ship,
        }
    }
}
impl<K> Copy for CellRef<'_, K> {}

/// A single player's battlefield: the grid, its fleet and the history of shots.
#[derive(Debug, Clone)]
pub struct Battlefield<K> {
    /// Occupancy and fired flags per cell.
    grid: Grid,

    /// Placed ships, indexed by [`ShipId`].
    ships: Vec<Ship<K>>,

    /// Fired coordinates in firing order. Never shrinks.
    fired: Vec<Coordinate>,
}

impl<K: ShipKind> Battlefield<K> {
    /// Create an empty battlefield of `size * size` cells.
    /// Panics if `size` is 0; see [`Battlefield::try_new`].
    pub fn new(size: usize) -> Self {
        Self::with_dimensions(GridSize::new(size))
    }

    /// Create an empty battlefield of `size * size` cells, or `None` if `size` is 0.
    pub fn try_new(size: usize) -> Option<Self> {
        GridSize::try_new(size).map(Self::with_dimensions)
    }

    /// Create an empty battlefield with the given dimensions.
    pub fn with_dimensions(dim: GridSize) -> Self {
        info!("creating a battlefield of {}x{}", dim.size(), dim.size());
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            fired: Vec::new(),
        }
    }

    /// Get the [`GridSize`] of this battlefield.
    pub fn dimensions(&self) -> GridSize {
        self.grid.dim
    }

    /// Length of one side of the battlefield.
    pub fn size(&self) -> usize {
        self.grid.dim.size()
    }

    /// Place one ship for each of `kinds`, in order, at random positions. Either every ship
    /// is placed or, on [`PlacementExhausted`], the battlefield is left as it was.
    pub fn generate_fleet<R, I>(
        &mut self,
        rng: &mut R,
        kinds: I,
    ) -> Result<(), PlacementExhausted<K>>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = K>,
    {
        let fleet = placement::generate_fleet(rng, self.dimensions(), kinds, &self.ships)?;
        for ship in fleet {
            self.commit(ship);
        }
        info!("fleet of {} ships is ready", self.ships.len());
        Ok(())
    }

    /// Place a single ship of the given kind at a random position.
    pub fn place_random<R>(
        &mut self,
        rng: &mut R,
        kind: K,
    ) -> Result<ShipRef<K>, PlacementExhausted<K>>
    where
        R: Rng + ?Sized,
    {
        let grid = &self.grid;
        let ship = placement::place_avoiding(rng, grid.dim, kind, |coord| {
            grid.get(coord).map_or(false, |cell| cell.ship.is_none())
        })?;
        let id = self.commit(ship);
        Ok(self.ship_ref(id))
    }

    /// Place a ship at an exact bow and orientation.
    pub fn place(
        &mut self,
        kind: K,
        bow: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipRef<K>, PlaceError<K>> {
        if kind.len() == 0 {
            return Err(PlaceError::new(CannotPlaceReason::EmptyShape, kind, bow));
        }
        let cells = match placement::fit(self.dimensions(), bow, orientation, kind.len()) {
            Some(cells) => cells,
            None => {
                return Err(PlaceError::new(
                    CannotPlaceReason::InsufficientSpace,
                    kind,
                    bow,
                ))
            }
        };
        if !self.grid.is_vacant(&cells) {
            return Err(PlaceError::new(
                CannotPlaceReason::AlreadyOccupied,
                kind,
                bow,
            ));
        }
        let id = self.commit(Ship::new(kind, orientation, cells));
        Ok(self.ship_ref(id))
    }

    /// Record a validated ship in the grid and the fleet.
    fn commit(&mut self, ship: Ship<K>) -> ShipId {
        let id = ShipId(self.ships.len());
        // Placement only produces in-bounds, unoccupied cells.
        for coord in ship.cells() {
            self.grid[coord].ship = Some(id);
        }
        debug!("{} {:?} is {} at {}", ship.kind().name(), id, ship.len(), ship.bow());
        self.ships.push(ship);
        id
    }

    fn ship_ref(&self, id: ShipId) -> ShipRef<K> {
        ShipRef {
            id,
            ship: &self.ships[id.0],
        }
    }

    /// Fire at `(x, y)`. Returns the ship occupying the cell, or `None` for a miss.
    ///
    /// Firing at a cell a second time changes nothing and returns the same ship as the
    /// first time, so a ship's hit count only grows on the first shot at each of its cells.
    /// Whether the ship was sunk by this shot is up to the caller to check with
    /// [`Ship::sunk`].
    pub fn hit(&mut self, x: i64, y: i64) -> Result<Option<ShipRef<K>>, InvalidCoordinate> {
        let coord = self
            .grid
            .dim
            .locate(x, y)
            .ok_or_else(|| InvalidCoordinate::new(x, y, self.size()))?;
        let cell = &mut self.grid[&coord];
        let struck = cell.ship;
        if cell.fired {
            debug!("{} was already fired upon", coord);
            return Ok(match struck {
                Some(id) => Some(self.ship_ref(id)),
                None => None,
            });
        }
        cell.fired = true;
        self.fired.push(coord);
        match struck {
            Some(id) => {
                let ship = &mut self.ships[id.0];
                ship.register_hit();
                debug!(
                    "hit {} at {} ({}/{})",
                    ship.kind().name(),
                    coord,
                    ship.hits(),
                    ship.len()
                );
                Ok(Some(self.ship_ref(id)))
            }
            None => {
                debug!("miss at {}", coord);
                Ok(None)
            }
        }
    }

    /// Whether `(x, y)` has been fired upon. Out of range coordinates were never fired upon.
    pub fn has_been_fired(&self, x: i64, y: i64) -> bool {
        self.grid
            .dim
            .locate(x, y)
            .and_then(|coord| self.grid.get(&coord))
            .map_or(false, |cell| cell.fired)
    }

    /// The ship occupying `(x, y)`, if any.
    pub fn ship_at(&self, x: i64, y: i64) -> Option<ShipRef<K>> {
        self.grid
            .dim
            .locate(x, y)
            .and_then(|coord| self.grid.get(&coord))
            .and_then(|cell| cell.ship)
            .map(|id| self.ship_ref(id))
    }

    /// Derived state of `(x, y)`, or `None` if it is off the grid.
    pub fn cell_state(&self, x: i64, y: i64) -> Option<CellState> {
        self.grid
            .dim
            .locate(x, y)
            .and_then(|coord| self.cell(coord))
            .map(|cell| cell.state())
    }

    /// Get a reference to the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef<K>> {
        self.grid.get(&coord).map(|cell| CellRef {
            coord,
            fired: cell.fired,
            ship: cell.ship.map(|id| self.ship_ref(id)),
        })
    }

    /// Get an iterator over the rows of the battlefield. Each row is an iterator over the
    /// cells of that row.
    pub fn iter_cells<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a, K>>> {
        self.dimensions()
            .iter_coordinates()
            .map(move |row| row.filter_map(move |coord| self.cell(coord)))
    }

    /// Every ship on the battlefield, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = ShipRef<K>> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| ShipRef { id: ShipId(i), ship })
    }

    /// Get the ship with the given ID, if it exists.
    pub fn get_ship(&self, id: ShipId) -> Option<ShipRef<K>> {
        self.ships.get(id.0).map(|ship| ShipRef { id, ship })
    }

    /// Ships that have not been sunk, in placement order.
    pub fn afloat_ships(&self) -> impl Iterator<Item = ShipRef<K>> {
        self.ships().filter(|ship| ship.afloat())
    }

    /// Returns true once no ship is afloat.
    pub fn defeated(&self) -> bool {
        self.afloat_ships().next().is_none()
    }

    /// Fired coordinates, in the order they were first fired upon.
    pub fn fired(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.fired.iter().copied()
    }
}
