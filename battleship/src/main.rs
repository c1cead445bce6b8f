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
use std::{
    fmt::{self, Write as _},
    io::{self, BufRead, Write},
};

use clap::{value_t, values_t, App, Arg, ArgMatches, ErrorKind};
use log::{info, warn};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use seabattle::{
    classic::{Class, Game, BATTLEFIELD_SIZE, STANDARD_FLEET},
    game::{CannotShootReason, ShotOutcome},
    CellState, ShipKind,
};

/// Largest battlefield that can still be addressed with a single column letter.
const MAX_SIZE: usize = 26;

/// Number of times a fresh battlefield is tried when the fleet does not fit.
const BUILD_ATTEMPTS: usize = 3;

/// Settings for a single game, taken from the command line.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Config {
    size: usize,
    fleet: Vec<Class>,
    seed: Option<u64>,
    cheats: bool,
}

impl Config {
    /// Read the config from parsed arguments. Exits with a usage error on invalid values.
    fn from_matches(matches: &ArgMatches) -> Self {
        let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
        if size == 0 || size > MAX_SIZE {
            clap::Error::with_description(
                &format!("size must be in range [1,{}], got {}", MAX_SIZE, size),
                ErrorKind::InvalidValue,
            )
            .exit();
        }
        let fleet = if matches.is_present("fleet") {
            values_t!(matches, "fleet", Class).unwrap_or_else(|e| e.exit())
        } else {
            STANDARD_FLEET.to_vec()
        };
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
        } else {
            None
        };
        Self {
            size,
            fleet,
            seed,
            cheats: matches.is_present("cheats"),
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let default_size = BATTLEFIELD_SIZE.to_string();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single player command line battleship game.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("side length of the battlefield")
                .takes_value(true)
                .default_value(&default_size),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("CLASSES")
                .help("comma separated ship classes to place, e.g. battleship,destroyer")
                .takes_value(true)
                .use_delimiter(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for ship placement, for a reproducible game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cheats")
                .long("cheats")
                .help("enable cheat codes"),
        )
        .get_matches();
    let config = Config::from_matches(&matches);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = build_game(&mut rng, &config)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut game, &mut rng, &config, &mut input)
}

/// Set up the battlefield, starting over with an empty one if the fleet could not be placed.
fn build_game(rng: &mut StdRng, config: &Config) -> io::Result<Game> {
    let mut attempt = 1;
    loop {
        match Game::new(rng, config.size, config.fleet.iter().copied()) {
            Ok(game) => return Ok(game),
            Err(err) if attempt < BUILD_ATTEMPTS => {
                warn!("the game could not be initialized ({}), starting over", err);
                attempt += 1;
            }
            Err(err) => return Err(io::Error::new(io::ErrorKind::Other, err)),
        }
    }
}

/// Run the firing loop until the input ends.
fn play(
    game: &mut Game,
    rng: &mut StdRng,
    config: &Config,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    let mut revealed = false;
    println!("Introduce coordinates (e.g. A1) and press enter to fire!");
    loop {
        println!();
        print!("{}", render_board(game, revealed));
        let line = match input.read_line("Fire at:")? {
            Some(line) => line.to_ascii_uppercase(),
            None => return Ok(()),
        };
        if line.is_empty() {
            continue;
        }
        info!("attempt fire on: {}", line);
        if game.over() {
            println!("{}", WIN_MESSAGE);
            continue;
        }
        if config.cheats {
            if let Some(cheat) = Cheat::from_code(&line) {
                info!("cheat code detected");
                match cheat {
                    Cheat::Reveal => revealed = true,
                    Cheat::HitRandom => report(game.hit_random_ship(rng)),
                    Cheat::SinkRandom => report(game.sink_random_ship(rng)),
                    Cheat::SinkAll => report(game.sink_all()),
                }
                continue;
            }
        }
        let (x, y) = match parse_target(&line) {
            Some(target) => target,
            None => {
                println!("Invalid target! Try again.");
                continue;
            }
        };
        if game.battlefield().has_been_fired(x, y) {
            println!("You already fired at {}.", line);
        }
        match game.fire(x, y) {
            Ok(outcome) => report(Some(outcome)),
            Err(CannotShootReason::OutOfBounds) => println!("Invalid target! Try again."),
            Err(CannotShootReason::AlreadyOver) => println!("{}", WIN_MESSAGE),
        }
    }
}

const WIN_MESSAGE: &str = "Congratulations, you won! Start a new game to play again.";

/// Print the result of a shot.
fn report(outcome: Option<ShotOutcome<Class>>) {
    match outcome {
        None => {}
        Some(ShotOutcome::Miss) => println!("Miss."),
        Some(ShotOutcome::Hit(_)) => println!("Hit!"),
        Some(ShotOutcome::Sunk(class)) => println!("You sank a {}!", class),
        Some(ShotOutcome::Victory(class)) => {
            println!("You sank a {}!", class);
            println!("{}", WIN_MESSAGE);
        }
    }
}

/// Shortcuts for trying out a game by hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Cheat {
    /// Show every ship on the board.
    Reveal,
    /// Hit a random afloat ship once.
    HitRandom,
    /// Sink a random afloat ship.
    SinkRandom,
    /// Sink every ship.
    SinkAll,
}

impl Cheat {
    /// Look up the cheat for an upper case code.
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "MARCOPOLO" => Some(Cheat::Reveal),
            "HITHERE" => Some(Cheat::HitRandom),
            "TORPEDO" => Some(Cheat::SinkRandom),
            "GOTTAGOFAST" => Some(Cheat::SinkAll),
            _ => None,
        }
    }
}

/// Parse an upper case target like `A1` into zero-based `(x, y)`. The letter picks the
/// column and the number the 1-based row. Bounds are left to the battlefield, so `A0`
/// parses to a row of -1.
fn parse_target(target: &str) -> Option<(i64, i64)> {
    static TARGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(?P<col>[A-Z])\s*(?P<row>[0-9]+)$").unwrap());
    let captures = TARGET.captures(target.trim())?;
    let col = captures.name("col")?.as_str().as_bytes()[0];
    let row: i64 = captures.name("row")?.as_str().parse().ok()?;
    Some((i64::from(col - b'A'), row - 1))
}

/// A cell as shown to the player.
enum ShownCell {
    NotShot,
    Miss,
    Ghost(Class),
    Hit(Class),
    Sunk(Class),
}

impl fmt::Display for ShownCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShownCell::NotShot => f.pad("~~"),
            ShownCell::Miss => f.pad("x"),
            ShownCell::Ghost(class) => f.pad(class.abbrev()),
            ShownCell::Hit(class) => f.pad(&format!("x{}", class.abbrev())),
            ShownCell::Sunk(class) => f.pad(&format!("X{}", class.abbrev())),
        }
    }
}

/// Draw the battlefield with lettered columns and numbered rows. Unfired ships are only
/// drawn when `revealed` is set.
fn render_board(game: &Game, revealed: bool) -> String {
    let field = game.battlefield();
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "   ");
    for col in (b'A'..).take(field.size()) {
        let _ = write!(out, "{:^4}", col as char);
    }
    let _ = writeln!(out);
    for (i, row) in field.iter_cells().enumerate() {
        let _ = write!(out, "{:>2} ", i + 1);
        for cell in row {
            let shown = match (cell.state(), cell.ship()) {
                (CellState::Untouched, Some(ship)) if revealed => ShownCell::Ghost(*ship.kind()),
                (CellState::Untouched, _) => ShownCell::NotShot,
                (CellState::Miss, _) => ShownCell::Miss,
                (CellState::HitAfloat, Some(ship)) => ShownCell::Hit(*ship.kind()),
                (CellState::HitSunk, Some(ship)) => ShownCell::Sunk(*ship.kind()),
                // Hit states always have a ship.
                (_, None) => ShownCell::Miss,
            };
            let _ = write!(out, "{:^4}", shown);
        }
        let _ = writeln!(out);
    }
    let afloat: Vec<&str> = field
        .afloat_ships()
        .map(|ship| ship.ship().kind().name())
        .collect();
    let _ = writeln!(out, "Afloat: {}", afloat.join(", "));
    out
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Print the prompt and read one trimmed line. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<&str>> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(self.buf.trim()))
    }
}

#[cfg(test)]
mod tests {
    use seabattle::{classic::Battlefield, Coordinate, Orientation};

    use super::*;

    #[test]
    fn parses_letter_and_one_based_row() {
        assert_eq!(parse_target("A1"), Some((0, 0)));
        assert_eq!(parse_target("J10"), Some((9, 9)));
        assert_eq!(parse_target("C 7"), Some((2, 6)));
        assert_eq!(parse_target("A0"), Some((0, -1)));
        assert_eq!(parse_target("Z99"), Some((25, 98)));
    }

    #[test]
    fn rejects_malformed_targets() {
        for target in &["", "A", "1A", "AA1", "a1", "A-1", "A1B", "A99999999999999999999"] {
            assert_eq!(parse_target(target), None, "{}", target);
        }
    }

    #[test]
    fn out_of_range_targets_are_rejected_by_the_game() {
        let mut game = small_game();
        let (x, y) = parse_target("F1").unwrap();
        assert_eq!(game.fire(x, y), Err(CannotShootReason::OutOfBounds));
        let (x, y) = parse_target("A0").unwrap();
        assert_eq!(game.fire(x, y), Err(CannotShootReason::OutOfBounds));
    }

    #[test]
    fn cheat_codes() {
        assert_eq!(Cheat::from_code("MARCOPOLO"), Some(Cheat::Reveal));
        assert_eq!(Cheat::from_code("HITHERE"), Some(Cheat::HitRandom));
        assert_eq!(Cheat::from_code("TORPEDO"), Some(Cheat::SinkRandom));
        assert_eq!(Cheat::from_code("GOTTAGOFAST"), Some(Cheat::SinkAll));
        assert_eq!(Cheat::from_code("B2"), None);
    }

    fn small_game() -> Game {
        let mut field = Battlefield::new(5);
        field
            .place(Class::Destroyer, Coordinate::new(0, 0), Orientation::Horizontal)
            .unwrap();
        Game::from_battlefield(field)
    }

    #[test]
    fn board_hides_ships_until_revealed() {
        let mut game = small_game();
        game.fire(0, 0).unwrap();
        game.fire(4, 4).unwrap();
        let hidden = render_board(&game, false);
        let lines: Vec<&str> = hidden.lines().collect();
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["A", "B", "C", "D", "E"]);
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["1", "xdd", "~~", "~~", "~~", "~~"]
        );
        assert_eq!(
            lines[5].split_whitespace().collect::<Vec<_>>(),
            ["5", "~~", "~~", "~~", "~~", "x"]
        );
        assert_eq!(lines[6], "Afloat: destroyer");

        let shown = render_board(&game, true);
        let row = shown.lines().nth(1).unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            ["1", "xdd", "dd", "dd", "dd", "~~"]
        );
    }

    #[test]
    fn sunk_ships_are_marked() {
        let mut game = small_game();
        for x in 0..4 {
            game.fire(x, 0).unwrap();
        }
        let board = render_board(&game, false);
        let row = board.lines().nth(1).unwrap();
        assert_eq!(
            row.split_whitespace().collect::<Vec<_>>(),
            ["1", "Xdd", "Xdd", "Xdd", "Xdd", "~~"]
        );
        assert!(game.over());
    }

    #[test]
    fn build_game_gives_up_when_fleet_never_fits() {
        let config = Config {
            size: 2,
            fleet: vec![Class::Battleship],
            seed: Some(1),
            cheats: false,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let err = build_game(&mut rng, &config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
