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
use crate::{
    board::Coordinate,
    ships::{Orientation, ShapeProjection},
};

/// Project a straight ship of `len` cells from `bow` along `orientation`, bow first.
/// The cells are not bounds checked. Returns `None` if the line runs past the largest
/// representable coordinate.
pub fn project(bow: Coordinate, orientation: Orientation, len: usize) -> Option<ShapeProjection> {
    let horizontal = orientation.is_horizontal();
    (0..len).map(|step| bow.offset(horizontal, step)).collect()
}
