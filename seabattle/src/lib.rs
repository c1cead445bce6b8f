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
//! Core of a single-player game of Battleship.
//!
//! A [`Battlefield`][board::Battlefield] is a square grid holding a fleet of straight,
//! non-overlapping ships. The [`placement`] engine places ships at random positions,
//! drawing from any [`rand::Rng`] so that tests can use a seeded generator. Shots are
//! resolved by [`Battlefield::hit`][board::Battlefield::hit], which reports the ship
//! struck, if any, and is idempotent for repeated shots at the same cell.
//!
//! [`classic`] provides the ship classes and fleet of the standard game, and [`game`]
//! wraps a battlefield to classify shots as misses, hits, sinkings or a victory.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use seabattle::classic::{Battlefield, Class, BATTLEFIELD_SIZE, STANDARD_FLEET};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut field = Battlefield::new(BATTLEFIELD_SIZE);
//! field.generate_fleet(&mut rng, STANDARD_FLEET.iter().copied()).unwrap();
//! assert_eq!(field.ships().count(), 3);
//!
//! let bow = field.ships().next().unwrap().bow();
//! let ship = field.hit(bow.x as i64, bow.y as i64).unwrap().unwrap();
//! assert_eq!(*ship.kind(), Class::Battleship);
//! assert_eq!(ship.hits(), 1);
//! ```

pub mod board;
pub mod classic;
pub mod game;
pub mod placement;
pub mod ships;

pub use crate::{
    board::{Battlefield, CellState, Coordinate, GridSize, InvalidCoordinate, PlacementExhausted},
    ships::{Orientation, Ship, ShipClass, ShipKind},
};
