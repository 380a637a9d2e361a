use std::{
    fs::File,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use fleetgrid::{
    board::{row_letter, Coordinate, GRID_SIZE},
    game::{Game, Player, TurnError, TurnOutcome},
};

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Two-player command line battleship on a 10x10 grid.")
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("level of log messages written to the terminal")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .case_insensitive(true)
                .default_value("warn"),
        )
        .arg(
            Arg::with_name("log_file")
                .long("log-file")
                .value_name("FILE")
                .help("also write debug logs to the given file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("random_placement")
                .short("r")
                .long("random-placement")
                .help("place both fleets at random and go straight to battle"),
        )
        .get_matches();

    init_logging(&matches)?;

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let mut game = Game::new();
    for &player in Player::ALL {
        if matches.is_present("random_placement") {
            game.place_remaining_random(player, &mut rng)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        } else {
            choose_placements(&mut rng, &mut game, player, &mut input)?;
        }
    }
    game.start()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    play(&mut game, &mut input)?;
    Ok(())
}

/// Set up terminal logging at the requested level, plus a debug-level log file if one
/// was asked for.
fn init_logging(matches: &ArgMatches) -> io::Result<()> {
    let level = matches
        .value_of("log_level")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if let Some(path) = matches.value_of("log_file") {
        loggers.push(WriteLogger::new(
            LevelFilter::Debug,
            config,
            File::create(path)?,
        ));
    }
    CombinedLogger::init(loggers).map_err(|err| io::Error::new(io::ErrorKind::Other, err))
}

/// A line typed at the placement prompt.
#[derive(Debug, PartialEq)]
enum Command {
    Place(Coordinate, Coordinate),
    RandomizeRest,
    Help,
}

/// Map a lower-cased placement line to a command, printing why it was rejected if it
/// was.
fn parse_command(input: &str) -> Option<Command> {
    /// Matcher for a pair of endpoints, e.g. `a0 a4`, `a0-a4` or `a0 to a4`.
    static ENDPOINTS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<end1>\w+)
        (?:\s*-\s*|\s+to\s+|\s+)
        (?P<end2>\w+)$",
        )
        .unwrap()
    });

    match input {
        "?" | "help" | "h" => Some(Command::Help),
        "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
        other => {
            if let Some(captures) = ENDPOINTS.captures(other) {
                let end1 = parse_coordinate(&captures["end1"])?;
                let end2 = parse_coordinate(&captures["end2"])?;
                Some(Command::Place(end1, end2))
            } else {
                println!("Invalid placement \"{}\". Use '?' for help", other);
                None
            }
        }
    }
}

/// Choose placements for all ships using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    game: &mut Game,
    player: Player,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    input.wait_for(&format!(
        "Player {}, place your ships. Press enter when the other player is not looking.",
        player.number()
    ))?;
    println!("Type help or ? for commands.");
    loop {
        let next = game.pending_ships(player).next();
        let ship = match next {
            Some(ship) => ship,
            None => break,
        };
        println!();
        println!("Your current board:");
        show_fleet_board(game, player);
        println!();
        println!("Placing your {} (length {}).", ship, ship.len());

        let cmd = input.read_input_lower("Enter both endpoints:", parse_command)?;

        match cmd {
            Command::Place(end1, end2) => {
                if let Err(err) = game.place_ship(player, ship, end1, end2) {
                    println!("Invalid placement: {}.", err);
                }
            }
            Command::RandomizeRest => {
                if let Err(err) = game.place_remaining_random(player, rng) {
                    println!("Could not finish placement: {}.", err);
                }
            }
            Command::Help => {
                println!(
                    "Available Commands:
    <end1> <end2>   place the current ship between the two endpoints, e.g. \"A0 A4\".
        Endpoints are a row letter A-J and a column digit 0-9. They must be on the
        same row or column and exactly span the length of the ship.
    randomize       place the remaining ships at random.
    help            show this message."
                );
            }
        }
    }
    println!();
    println!("All ships placed:");
    show_fleet_board(game, player);
    Ok(())
}

/// Alternate turns until one player wins.
fn play(game: &mut Game, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    while game.winner().is_none() {
        let player = game.current();
        println!();
        input.wait_for(&format!(
            "Player {}'s turn. Press enter when the other player is not looking.",
            player.number()
        ))?;
        println!("Your shots:");
        show_target_board(game, player);
        println!();
        println!("Your fleet:");
        show_fleet_board(game, player);
        println!();

        loop {
            let target = input.read_input("Enter target:", |input| match input {
                "?" | "help" | "h" => {
                    println!("Enter a row letter A-J and a column digit 0-9, e.g. \"C7\".");
                    None
                }
                other => parse_coordinate(other),
            })?;
            match game.attack(target) {
                Ok(TurnOutcome::Miss) => println!("Miss."),
                Ok(TurnOutcome::Hit(_)) => println!("Hit!"),
                Ok(TurnOutcome::Sunk(ship)) => println!("Sunk! You sank their {}.", ship),
                Ok(TurnOutcome::Victory(ship)) => {
                    println!("Sunk! You sank their {}.", ship);
                    println!("Player {} wins!", player.number());
                }
                Err(TurnError::Shot(_)) => {
                    println!("Invalid move, you already fired at {}.", target);
                    continue;
                }
                // Placement is finished before play begins and the loop ends at victory.
                Err(err @ TurnError::NotStarted) | Err(err @ TurnError::AlreadyOver) => {
                    unreachable!("{}", err)
                }
            }
            break;
        }
    }
    Ok(())
}

/// Parse a coordinate, printing why it is invalid if it is.
fn parse_coordinate(text: &str) -> Option<Coordinate> {
    match text.parse() {
        Ok(coord) => Some(coord),
        Err(err) => {
            println!("Invalid coordinate \"{}\": {}.", text, err);
            None
        }
    }
}

/// Print out the given player's own fleet.
fn show_fleet_board(game: &Game, player: Player) {
    show_board(
        game.contestant(player)
            .fleet()
            .rows()
            .map(|row| row.map(|cell| cell.display_char())),
    )
}

/// Print out the given player's record of shots at their opponent.
fn show_target_board(game: &Game, player: Player) {
    show_board(
        game.contestant(player)
            .targets()
            .rows()
            .map(|row| row.map(|mark| mark.display_char())),
    )
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the cell characters.
fn show_board(rows: impl Iterator<Item = impl Iterator<Item = char>>) {
    print!(" ");
    for col in 0..GRID_SIZE {
        print!(" {}", col);
    }
    println!();
    for (row, cells) in rows.enumerate() {
        print!("{}", row_letter(row).unwrap_or(' '));
        for cell in cells {
            print!("|{}", cell);
        }
        println!("|");
    }
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
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Show a message and wait for the player to press enter.
    fn wait_for(&mut self, prompt: &str) -> io::Result<()> {
        self.read_input_inner(prompt)
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            log::info!("input closed, exiting");
            std::process::exit(0);
        }
        Ok(())
    }
}
