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
//! Dimensions of the square battlefield.
use std::{borrow::Borrow, convert::TryFrom};

use rand::{distributions::Uniform, Rng};

use crate::board::Coordinate;

/// Dimensions of a square grid of `size * size` cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridSize {
    size: usize,
}

impl GridSize {
    /// Create a new [`GridSize`] with the given side length.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Some(dim) => dim,
            None if size == 0 => panic!("GridSize must be nonzero"),
            None => panic!(
                "GridSize too large: {} * {} > {}",
                size,
                size,
                usize::max_value()
            ),
        }
    }

    /// Create a new [`GridSize`] with the given side length.
    /// Returns `None` if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Option<Self> {
        if size == 0 {
            None
        } else {
            size.checked_mul(size).map(|_| Self { size })
        }
    }

    /// Length of one side of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells in the grid.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check whether the [`Coordinate`] lies inside the grid.
    #[inline]
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        c.x < self.size && c.y < self.size
    }

    /// Convert signed `x`, `y` values into a [`Coordinate`] if they are inside the grid.
    pub fn locate(&self, x: i64, y: i64) -> Option<Coordinate> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let coord = Coordinate::new(x, y);
        if self.contains(coord) {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to a row-major index. Returns `None` if the coordinate is out of
    /// bounds.
    pub(crate) fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Sample a coordinate uniformly from the whole grid.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let axis = Uniform::new(0, self.size);
        Coordinate::new(rng.sample(axis), rng.sample(axis))
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates
    /// of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |y| (0..size).map(move |x| Coordinate { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(GridSize::try_new(0), None);
        assert_eq!(GridSize::try_new(usize::max_value()), None);
        assert_eq!(GridSize::try_new(1).map(|d| d.total_size()), Some(1));
    }

    #[test]
    fn locate_checks_both_axes() {
        let dim = GridSize::new(10);
        assert_eq!(dim.locate(0, 0), Some(Coordinate::new(0, 0)));
        assert_eq!(dim.locate(9, 9), Some(Coordinate::new(9, 9)));
        assert_eq!(dim.locate(-1, 0), None);
        assert_eq!(dim.locate(0, -1), None);
        assert_eq!(dim.locate(10, 0), None);
        assert_eq!(dim.locate(0, 10), None);
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = GridSize::new(4);
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 2)), Some(9));
        assert_eq!(dim.try_linearize(&Coordinate::new(4, 0)), None);
    }

    #[test]
    fn samples_cover_the_grid() {
        let dim = GridSize::new(3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 9];
        for _ in 0..500 {
            let coord = dim.sample(&mut rng);
            seen[dim.try_linearize(&coord).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn iterates_rows_in_order() {
        let rows: Vec<Vec<_>> = GridSize::new(2)
            .iter_coordinates()
            .map(|row| row.map(<(usize, usize)>::from).collect())
            .collect();
        assert_eq!(rows, vec![vec![(0, 0), (1, 0)], vec![(0, 1), (1, 1)]]);
    }
}
