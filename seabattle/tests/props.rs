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
use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{Battlefield, ShipClass};

fn fleet(lens: &[usize]) -> Vec<ShipClass> {
    lens.iter()
        .enumerate()
        .map(|(i, &len)| ShipClass::new(format!("ship{}", i), len))
        .collect()
}

/// A populated battlefield; fleets are kept small enough that placement always succeeds.
fn populated(seed: u64, size: usize, lens: &[usize]) -> Battlefield<ShipClass> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = Battlefield::new(size);
    field.generate_fleet(&mut rng, fleet(lens)).unwrap();
    field
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_stay_in_bounds_and_never_overlap(
        seed in any::<u64>(),
        size in 8usize..16,
        lens in prop::collection::vec(1usize..5, 1..5),
    ) {
        let field = populated(seed, size, &lens);
        prop_assert_eq!(field.ships().count(), lens.len());
        let mut seen = HashSet::new();
        for ship in field.ships() {
            prop_assert_eq!(ship.cells().len(), ship.len());
            prop_assert_eq!(ship.cells()[0], ship.bow());
            for cell in ship.cells() {
                prop_assert!(cell.x < size && cell.y < size);
                prop_assert!(seen.insert(*cell));
            }
        }
    }

    #[test]
    fn repeated_hits_are_idempotent(
        seed in any::<u64>(),
        x in 0i64..10,
        y in 0i64..10,
    ) {
        let mut field = populated(seed, 10, &[5, 4, 4]);
        let before: Vec<usize> = field.ships().map(|ship| ship.hits()).collect();
        let first = field.hit(x, y).unwrap().map(|ship| ship.id());
        let after: Vec<usize> = field.ships().map(|ship| ship.hits()).collect();
        let second = field.hit(x, y).unwrap().map(|ship| ship.id());
        let again: Vec<usize> = field.ships().map(|ship| ship.hits()).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(&after, &again);
        prop_assert_eq!(field.fired().count(), 1);
        let gained: usize = after.iter().sum::<usize>() - before.iter().sum::<usize>();
        prop_assert_eq!(gained, if first.is_some() { 1 } else { 0 });
    }

    #[test]
    fn hit_counts_grow_monotonically_and_win_is_live(
        seed in any::<u64>(),
        shots in prop::collection::vec((0i64..10, 0i64..10), 0..150),
    ) {
        let mut field = populated(seed, 10, &[5, 4, 4]);
        let mut last: Vec<usize> = vec![0; 3];
        for (x, y) in shots {
            field.hit(x, y).unwrap();
            let now: Vec<usize> = field.ships().map(|ship| ship.hits()).collect();
            for (ship, (&old, &new)) in field.ships().zip(last.iter().zip(now.iter())) {
                prop_assert!(old <= new);
                prop_assert!(new <= ship.len());
            }
            let all_sunk = field.ships().all(|ship| ship.hits() == ship.len());
            prop_assert_eq!(field.afloat_ships().next().is_none(), all_sunk);
            prop_assert_eq!(field.defeated(), all_sunk);
            last = now;
        }
    }
}
