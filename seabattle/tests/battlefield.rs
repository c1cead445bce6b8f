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
use rand::{rngs::StdRng, SeedableRng};

use seabattle::{
    classic::{Class, BATTLEFIELD_SIZE, STANDARD_FLEET},
    Battlefield, Coordinate, Orientation, ShipClass, ShipKind,
};

fn destroyer_at_2_3() -> Battlefield<ShipClass> {
    let mut field = Battlefield::new(10);
    field
        .place(ShipClass::new("Destroyer", 4), Coordinate::new(2, 3), Orientation::Horizontal)
        .unwrap();
    field
}

#[test]
fn destroyer_is_hit_once_per_cell_and_sinks() {
    let mut field = destroyer_at_2_3();

    let ship = field.hit(3, 3).unwrap().expect("ship at (3, 3)");
    let first = ship.id();
    assert_eq!(ship.hits(), 1);
    assert!(!ship.sunk());

    let ship = field.hit(3, 3).unwrap().expect("ship at (3, 3)");
    assert_eq!(ship.id(), first);
    assert_eq!(ship.hits(), 1);

    assert!(field.hit(9, 9).unwrap().is_none());
    assert!(field.has_been_fired(9, 9));

    field.hit(2, 3).unwrap();
    field.hit(4, 3).unwrap();
    let ship = field.hit(5, 3).unwrap().expect("ship at (5, 3)");
    assert_eq!(ship.hits(), 4);
    assert_eq!(ship.hits(), ship.len());
    assert!(ship.sunk());
    assert_eq!(field.afloat_ships().count(), 0);
    assert!(field.defeated());
}

#[test]
fn shots_off_the_grid_are_rejected_without_side_effects() {
    let mut field = destroyer_at_2_3();
    for &(x, y) in &[(-1, 0), (10, 0), (0, -1), (0, 10), (i64::min_value(), i64::max_value())] {
        let err = field.hit(x, y).unwrap_err();
        assert_eq!(err.coord(), (x, y));
        assert_eq!(err.size(), 10);
        assert!(!field.has_been_fired(x, y));
    }
    assert_eq!(field.fired().count(), 0);
    assert_eq!(field.ships().next().unwrap().hits(), 0);
}

#[test]
fn queries_are_total() {
    let field = destroyer_at_2_3();
    assert!(field.ship_at(-3, 3).is_none());
    assert!(field.ship_at(100, 3).is_none());
    assert!(!field.has_been_fired(-1, -1));
    assert!(field.cell_state(11, 0).is_none());
}

#[test]
fn fleet_too_large_for_grid_is_exhausted() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut field = Battlefield::new(1);
    let err = field
        .generate_fleet(&mut rng, vec![ShipClass::new("Battleship", 5)])
        .unwrap_err();
    assert_eq!(err.len(), 5);
    assert_eq!(err.kind().name(), "Battleship");
    assert_eq!(field.ships().count(), 0);
}

#[test]
fn standard_game_is_won_by_firing_everywhere() {
    let mut rng = StdRng::seed_from_u64(2021);
    let mut field = Battlefield::new(BATTLEFIELD_SIZE);
    field
        .generate_fleet(&mut rng, STANDARD_FLEET.iter().copied())
        .unwrap();
    let kinds: Vec<Class> = field.ships().map(|ship| *ship.kind()).collect();
    assert_eq!(kinds, STANDARD_FLEET);

    let size = BATTLEFIELD_SIZE as i64;
    let mut hits = 0;
    for y in 0..size {
        for x in 0..size {
            if field.hit(x, y).unwrap().is_some() {
                hits += 1;
            }
            // The fleet goes down with its last cell, which may come before the sweep ends.
            assert_eq!(field.defeated(), hits == 13);
        }
    }
    assert_eq!(hits, 13);
    assert!(field.defeated());
    assert_eq!(field.fired().count(), BATTLEFIELD_SIZE * BATTLEFIELD_SIZE);
}
