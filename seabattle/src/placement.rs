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
//! Random placement of non-overlapping ships on a square grid.
//!
//! Each ship is placed by repeatedly sampling a bow uniformly over the whole grid and an
//! orientation with equal odds, then keeping the first candidate whose cells all lie on
//! the grid and avoid every occupied cell. Candidates are sampled from the full grid
//! rather than only from bows that would fit, so many samples are rejected.
//! After [`MAX_PLACEMENT_ATTEMPTS`] rejected samples the ship is reported as
//! [`PlacementExhausted`].

use log::{debug, warn};
use rand::Rng;

use crate::{
    board::{Coordinate, GridSize, PlacementExhausted},
    ships::{project, Orientation, ShapeProjection, Ship, ShipKind},
};

/// Number of random positions tried for a single ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Place one ship of the given kind at a random position on a grid of `dim`, avoiding the
/// cells of every ship in `existing`.
pub fn place_ship<K, R>(
    rng: &mut R,
    dim: GridSize,
    kind: K,
    existing: &[Ship<K>],
) -> Result<Ship<K>, PlacementExhausted<K>>
where
    K: ShipKind,
    R: Rng + ?Sized,
{
    place_avoiding(rng, dim, kind, |coord| {
        !existing.iter().any(|ship| ship.occupies(coord))
    })
}

/// Place a ship for each kind in order. Ships placed earlier constrain those placed
/// later, and every new ship also avoids `existing`. Returns only the newly placed ships.
/// Nothing is returned if any ship cannot be placed.
pub fn generate_fleet<K, R, I>(
    rng: &mut R,
    dim: GridSize,
    kinds: I,
    existing: &[Ship<K>],
) -> Result<Vec<Ship<K>>, PlacementExhausted<K>>
where
    K: ShipKind,
    R: Rng + ?Sized,
    I: IntoIterator<Item = K>,
{
    let mut fleet: Vec<Ship<K>> = Vec::new();
    for kind in kinds {
        let ship = place_avoiding(rng, dim, kind, |coord| {
            !existing
                .iter()
                .chain(fleet.iter())
                .any(|ship| ship.occupies(coord))
        })?;
        fleet.push(ship);
    }
    Ok(fleet)
}

/// Sample candidate positions until one lies on the grid and every cell passes `is_free`.
pub(crate) fn place_avoiding<K, R, F>(
    rng: &mut R,
    dim: GridSize,
    kind: K,
    is_free: F,
) -> Result<Ship<K>, PlacementExhausted<K>>
where
    K: ShipKind,
    R: Rng + ?Sized,
    F: Fn(&Coordinate) -> bool,
{
    let len = kind.len();
    if len == 0 {
        warn!("{} has length 0 and cannot be placed", kind.name());
        return Err(PlacementExhausted::new(kind, len, 0));
    }
    debug!("building a {} of length {}", kind.name(), len);
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let bow = dim.sample(rng);
        let orientation: Orientation = rng.gen();
        if let Some(cells) = fit(dim, bow, orientation, len) {
            if cells.iter().all(|coord| is_free(coord)) {
                debug!("{} placed at {} {:?}", kind.name(), bow, orientation);
                return Ok(Ship::new(kind, orientation, cells));
            }
        }
    }
    warn!(
        "no room for a {} of length {} on a {}x{} grid after {} attempts",
        kind.name(),
        len,
        dim.size(),
        dim.size(),
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(PlacementExhausted::new(kind, len, MAX_PLACEMENT_ATTEMPTS))
}

/// Project the ship and keep the projection only if it is non-empty and every cell is on
/// the grid.
pub(crate) fn fit(
    dim: GridSize,
    bow: Coordinate,
    orientation: Orientation,
    len: usize,
) -> Option<ShapeProjection> {
    project(bow, orientation, len).filter(|cells| {
        !cells.is_empty() && cells.iter().all(|coord| dim.contains(coord))
    })
}
