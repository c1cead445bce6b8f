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
use std::fmt;

use crate::ships::ShipKind;

/// A data-driven ship kind: a name and a length, for fleets configured at runtime.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ShipClass {
    name: String,
    len: usize,
}

impl ShipClass {
    /// Construct a ship class with the given name and length. Panics if len is 0.
    pub fn new<S: Into<String>>(name: S, len: usize) -> Self {
        assert!(len > 0);
        Self {
            name: name.into(),
            len,
        }
    }
}

impl ShipKind for ShipClass {
    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.name)
    }
}
