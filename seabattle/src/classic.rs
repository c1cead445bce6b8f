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
//! The standard single-player game: a 10x10 battlefield with one battleship and two
//! destroyers.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{board, game, ships::ShipKind};

/// Side length of the standard battlefield.
pub const BATTLEFIELD_SIZE: usize = 10;

/// The fleet placed on the standard battlefield, in placement order.
pub const STANDARD_FLEET: &[Class] = &[Class::Battleship, Class::Destroyer, Class::Destroyer];

/// Alias to ShipRef with fixed generic types.
pub type ShipRef<'a> = board::ShipRef<'a, Class>;
/// Alias to Battlefield with fixed generic types.
pub type Battlefield = board::Battlefield<Class>;
/// Alias to Game with fixed generic types.
pub type Game = game::Game<Class>;

/// Ship classes of the standard game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Class {
    /// Battleship: length 5.
    Battleship,
    /// Destroyer: length 4.
    Destroyer,
}

impl Class {
    /// All ship classes.
    pub const ALL: &'static [Class] = &[Class::Battleship, Class::Destroyer];

    /// Two letter abbreviation used when drawing the board.
    pub fn abbrev(self) -> &'static str {
        match self {
            Class::Battleship => "bb",
            Class::Destroyer => "dd",
        }
    }
}

impl ShipKind for Class {
    fn len(&self) -> usize {
        match self {
            Class::Battleship => 5,
            Class::Destroyer => 4,
        }
    }

    fn name(&self) -> &str {
        match self {
            Class::Battleship => "battleship",
            Class::Destroyer => "destroyer",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown ship class name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship class {0:?}, choose \"battleship\" or \"destroyer\"")]
pub struct UnknownClass(String);

impl FromStr for Class {
    type Err = UnknownClass;

    /// Accepts the full name or the abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bb" | "battleship" => Ok(Class::Battleship),
            "dd" | "destroyer" => Ok(Class::Destroyer),
            _ => Err(UnknownClass(s.to_owned())),
        }
    }
}
