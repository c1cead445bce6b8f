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
//! Errors used by the [`Battlefield`][crate::board::Battlefield] and the placement engine.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a shot targets a cell outside the battlefield. The battlefield is
/// left untouched.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid coordinate ({x}, {y}) for a {size}x{size} battlefield")]
pub struct InvalidCoordinate {
    x: i64,
    y: i64,
    size: usize,
}

impl InvalidCoordinate {
    pub(crate) fn new(x: i64, y: i64, size: usize) -> Self {
        Self { x, y, size }
    }

    /// The rejected `(x, y)` pair.
    pub fn coord(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// Side length of the battlefield that rejected the shot.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Error returned when no valid position was found for a ship within the attempt cap.
/// Usually means the requested fleet does not fit the grid.
#[derive(Error)]
#[error("could not find a position for {kind:?} (length {len}) after {attempts} attempts")]
pub struct PlacementExhausted<K: Debug> {
    /// Kind of the ship that could not be placed.
    kind: K,
    /// Length of that ship.
    len: usize,
    /// Number of positions sampled before giving up.
    attempts: usize,
}

impl<K: Debug> PlacementExhausted<K> {
    pub(crate) fn new(kind: K, len: usize, attempts: usize) -> Self {
        Self {
            kind,
            len,
            attempts,
        }
    }

    /// Kind of the ship that could not be placed.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Length of the ship that could not be placed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of random positions that were tried.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl<K: Debug> Debug for PlacementExhausted<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Part of the ship would lie outside the grid.
    #[error("insufficient space for the ship at the specified position")]
    InsufficientSpace,
    /// The ship would overlap a ship that was already placed.
    #[error("the specified position was already occupied")]
    AlreadyOccupied,
    /// The ship kind has a length of zero and occupies no cells.
    #[error("a ship must occupy at least one cell")]
    EmptyShape,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place {kind:?} at {bow}: {reason}")]
pub struct PlaceError<K: Debug> {
    #[source]
    reason: CannotPlaceReason,
    kind: K,
    bow: Coordinate,
}

impl<K: Debug> PlaceError<K> {
    pub(crate) fn new(reason: CannotPlaceReason, kind: K, bow: Coordinate) -> Self {
        Self { reason, kind, bow }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Kind of the ship that was not placed.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Bow coordinate where placement was attempted.
    pub fn bow(&self) -> Coordinate {
        self.bow
    }
}

impl<K: Debug> Debug for PlaceError<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
