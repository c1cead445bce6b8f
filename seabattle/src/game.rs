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
//! A single-player game over one [`Battlefield`]: classifies shots, detects the win, and
//! provides the shortcut actions used for testing a game by hand.
use log::info;
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    board::{Battlefield, GridSize, InvalidCoordinate, PlacementExhausted, ShipRef},
    ships::{ShipId, ShipKind},
};

/// Reason why a shot was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// Every ship has already been sunk.
    #[error("the game is already over")]
    AlreadyOver,

    /// The target coordinate is outside the battlefield.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
}

impl From<InvalidCoordinate> for CannotShootReason {
    fn from(_: InvalidCoordinate) -> Self {
        CannotShootReason::OutOfBounds
    }
}

/// Outcome of a successfully-fired shot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ShotOutcome<K> {
    /// Nothing was hit.
    Miss,
    /// The given ship was hit but it was not sunk.
    Hit(K),
    /// The given ship was hit and it is sunk, but other ships are still afloat.
    Sunk(K),
    /// The given ship was hit and sunk, and no ships are left afloat.
    Victory(K),
}

impl<K> ShotOutcome<K> {
    /// Get the kind of the ship that was hit.
    pub fn ship(&self) -> Option<&K> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(ref kind)
            | ShotOutcome::Sunk(ref kind)
            | ShotOutcome::Victory(ref kind) => Some(kind),
        }
    }
}

/// Game state: the battlefield being fired upon.
#[derive(Debug, Clone)]
pub struct Game<K> {
    field: Battlefield<K>,
}

impl<K: ShipKind> Game<K> {
    /// Build a battlefield of `size * size` cells and place `fleet` on it at random.
    /// Panics if `size` is 0.
    pub fn new<R, I>(rng: &mut R, size: usize, fleet: I) -> Result<Self, PlacementExhausted<K>>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = K>,
    {
        let mut field = Battlefield::with_dimensions(GridSize::new(size));
        field.generate_fleet(rng, fleet)?;
        info!("the game is ready! good luck!");
        Ok(Self { field })
    }

    /// Play on an already populated battlefield.
    pub fn from_battlefield(field: Battlefield<K>) -> Self {
        Self { field }
    }

    /// The battlefield being played on.
    pub fn battlefield(&self) -> &Battlefield<K> {
        &self.field
    }

    /// Returns true once every ship has been sunk.
    pub fn over(&self) -> bool {
        self.field.defeated()
    }

    /// Fire at `(x, y)`. Shots at a cell already fired upon are classified again from the
    /// current state of the ship there.
    pub fn fire(&mut self, x: i64, y: i64) -> Result<ShotOutcome<K>, CannotShootReason> {
        if self.over() {
            return Err(CannotShootReason::AlreadyOver);
        }
        let struck = self.field.hit(x, y)?.map(|ship| ship.id());
        let outcome = self.classify(struck);
        if let ShotOutcome::Victory(_) = outcome {
            info!("the game is over! you won!");
        }
        Ok(outcome)
    }

    fn classify(&self, struck: Option<ShipId>) -> ShotOutcome<K> {
        let ship = match struck.and_then(|id| self.field.get_ship(id)) {
            None => return ShotOutcome::Miss,
            Some(ship) => ship,
        };
        let kind = ship.kind().clone();
        if !ship.sunk() {
            ShotOutcome::Hit(kind)
        } else if self.over() {
            ShotOutcome::Victory(kind)
        } else {
            ShotOutcome::Sunk(kind)
        }
    }

    fn pick_afloat<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ShipId> {
        let afloat: Vec<ShipId> = self.field.afloat_ships().map(|ship| ship.id()).collect();
        info!("there are {} afloat ships", afloat.len());
        afloat.choose(rng).copied()
    }

    /// Fire at every cell of the ship, returning the classification of the last shot.
    fn sink(&mut self, id: ShipId) -> ShotOutcome<K> {
        let cells: Vec<_> = self
            .field
            .get_ship(id)
            .map(|ship: ShipRef<K>| ship.cells().to_vec())
            .unwrap_or_default();
        for coord in cells {
            let (x, y) = coord.signed();
            // Cells of a placed ship are always on the battlefield.
            let _ = self.field.hit(x, y);
        }
        self.classify(Some(id))
    }

    /// Fire at a random cell, not yet fired upon, of a random afloat ship. Returns `None`
    /// if the game is already over.
    pub fn hit_random_ship<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ShotOutcome<K>> {
        let id = self.pick_afloat(rng)?;
        let target = {
            let ship = self.field.get_ship(id)?;
            let field = &self.field;
            let unfired: Vec<_> = ship
                .cells()
                .iter()
                .filter(|coord| {
                    let (x, y) = coord.signed();
                    !field.has_been_fired(x, y)
                })
                .collect();
            // An afloat ship always has at least one cell left to hit.
            *unfired.choose(rng).copied()?
        };
        let (x, y) = target.signed();
        self.fire(x, y).ok()
    }

    /// Sink a random afloat ship. Returns `None` if the game is already over.
    pub fn sink_random_ship<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ShotOutcome<K>> {
        let id = self.pick_afloat(rng)?;
        Some(self.sink(id))
    }

    /// Sink every afloat ship. Returns the outcome of the final shot, or `None` if the game
    /// is already over.
    pub fn sink_all(&mut self) -> Option<ShotOutcome<K>> {
        let afloat: Vec<ShipId> = self.field.afloat_ships().map(|ship| ship.id()).collect();
        info!("there are {} afloat ships, sinking all...", afloat.len());
        afloat.into_iter().map(|id| self.sink(id)).last()
    }
}
