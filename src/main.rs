use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, print_board, random_layout, Board, Coord, FleetConfig, ShotResult};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a fleet layout and print the board.
    Check {
        #[arg(long = "ship", value_parser = parse_ship, required = true, help = "Ship endpoints as ROW,COL:ROW,COL")]
        ships: Vec<(Coord, Coord)>,
    },
    /// Generate a random legal fleet layout.
    Random {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print a JSON report instead of the board")]
        json: bool,
    },
    /// Fire shots at a fleet, random unless ships are given.
    Play {
        #[arg(long = "ship", value_parser = parse_ship, help = "Ship endpoints as ROW,COL:ROW,COL")]
        ships: Vec<(Coord, Coord)>,
        #[arg(long = "shot", value_parser = parse_coord, help = "Target as ROW,COL")]
        shots: Vec<Coord>,
        #[arg(long, conflicts_with = "ships", help = "Fix RNG seed for the random layout (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print a JSON report instead of the board")]
        json: bool,
    },
}

fn parse_coord(input: &str) -> Result<Coord, String> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| format!("Invalid coordinate '{}' - expected ROW,COL", input))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a non-negative number", row.trim()))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a non-negative number", col.trim()))?;
    Ok((row, col))
}

fn parse_ship(input: &str) -> Result<(Coord, Coord), String> {
    let (start, end) = input
        .split_once(':')
        .ok_or_else(|| format!("Invalid ship '{}' - expected ROW,COL:ROW,COL", input))?;
    Ok((parse_coord(start)?, parse_coord(end)?))
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = FleetConfig::standard();

    match cli.command {
        Commands::Check { ships } => {
            let board = Board::new(ships, &config).context("invalid fleet layout")?;
            print_board(&board);
            println!("Fleet is valid: {} ships", board.ships().len());
        }
        Commands::Random { seed, json } => {
            let mut rng = make_rng(seed);
            let layout = random_layout(&mut rng, &config)?;
            let board = Board::new(layout.iter().copied(), &config)?;
            if json {
                println!("{}", serde_json::to_string(&json!({ "ships": layout }))?);
            } else {
                print_board(&board);
            }
        }
        Commands::Play {
            ships,
            shots,
            seed,
            json,
        } => {
            let layout = if ships.is_empty() {
                random_layout(&mut make_rng(seed), &config)?
            } else {
                ships
            };
            let mut board = Board::new(layout.iter().copied(), &config)
                .context("invalid fleet layout")?;

            let results: Vec<(Coord, ShotResult)> =
                shots.into_iter().map(|shot| (shot, board.fire(shot))).collect();

            if json {
                let report = json!({
                    "ships": layout,
                    "shots": results
                        .iter()
                        .map(|(shot, res)| json!({ "target": shot, "result": res }))
                        .collect::<Vec<_>>(),
                    "remaining": board.remaining_ships(),
                    "defeated": board.all_sunk(),
                });
                println!("{}", serde_json::to_string(&report)?);
            } else {
                for ((row, col), res) in &results {
                    println!("({}, {}): {}", row, col, res);
                }
                print_board(&board);
                println!("Ships afloat: {}", board.remaining_ships());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ship_endpoints() {
        assert_eq!(parse_ship("0,0:0,3"), Ok(((0, 0), (0, 3))));
        assert_eq!(parse_ship(" 5, 5 : 5,5"), Ok(((5, 5), (5, 5))));
        assert!(parse_ship("0,0").is_err());
        assert!(parse_coord("a,1").is_err());
        assert!(parse_coord("-1,1").is_err());
    }

    #[test]
    fn seed_only_applies_to_random_fleets() {
        assert!(Cli::try_parse_from(["seabattle", "play", "--seed", "3", "--shot", "0,0"]).is_ok());
        assert!(Cli::try_parse_from(["seabattle", "play", "--seed", "3", "--ship", "0,0:0,3"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
