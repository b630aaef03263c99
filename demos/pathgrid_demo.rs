//! Runs the pathgrid search engine on a text map and prints the result.
//!
//! Run: cargo run --bin pathgrid-demo -- [bfs|dijkstra|astar|all] [--animate] [--seed N]

use std::str::FromStr;
use std::thread;
use std::time::Duration;

use clap::Parser;
use pathgrid_core::TerrainGrid;
use pathgrid_demos::{MAP, Overlay, random_map};
use pathgrid_search::{Algorithm, Driver, SearchConfig, SearchResult, UnknownAlgorithm};

/// Delay between two animation ticks.
const TICK: Duration = Duration::from_millis(40);
/// Steps per tick in animated mode.
const STEPS_PER_TICK: usize = 2;

/// Which algorithms to run: one by name, or `all` of them in turn.
#[derive(Copy, Clone, Debug)]
enum Selection {
    All,
    One(Algorithm),
}

impl Selection {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::One(algorithm) => vec![algorithm],
        }
    }
}

impl FromStr for Selection {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::One)
        }
    }
}

#[derive(Parser)]
#[command(name = "pathgrid-demo")]
#[command(version, about = "Grid pathfinding demo")]
struct Cli {
    /// Algorithm to run: bfs, dijkstra, astar or all
    #[arg(default_value = "all")]
    algorithm: Selection,

    /// Redraw the map while the search runs
    #[arg(long)]
    animate: bool,

    /// Search a random map generated from this seed instead of the built-in one
    #[arg(long)]
    seed: Option<u64>,
}

fn run(grid: &TerrainGrid, algorithm: Algorithm, animate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let start = grid.start().ok_or("map has no start marker")?;
    let end = grid.end().ok_or("map has no end marker")?;
    let config = SearchConfig::new(algorithm).with_steps_per_tick(STEPS_PER_TICK);
    let mut driver = Driver::new(grid, config, start, end, Overlay::new())?;

    if animate {
        loop {
            let status = driver.tick()?;
            print!("\x1b[2J\x1b[H{algorithm}\n{}\n", driver.observer().render(grid));
            if status.is_terminal() {
                break;
            }
            thread::sleep(TICK);
        }
    } else {
        driver.run_to_completion()?;
        println!("{algorithm}\n{}", driver.observer().render(grid));
    }

    let stats = driver.stats();
    match driver.result() {
        Some(SearchResult::Found(path)) => println!(
            "path: {} cells, cost {} | expanded {}, enqueued {}, peak frontier {}",
            path.len(),
            path.cost,
            stats.expanded,
            stats.enqueued,
            stats.max_frontier
        ),
        _ => println!("no path | expanded {}", stats.expanded),
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let grid = match cli.seed {
        Some(seed) => random_map(seed),
        None => TerrainGrid::parse(MAP)?,
    };
    for algorithm in cli.algorithm.algorithms() {
        run(&grid, algorithm, cli.animate)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_all_algorithms_on_the_built_in_map() {
        let cli = Cli::try_parse_from(["pathgrid-demo"]).unwrap();
        assert_eq!(cli.algorithm.algorithms(), Algorithm::ALL.to_vec());
        assert!(!cli.animate);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_algorithm_and_flags() {
        let cli =
            Cli::try_parse_from(["pathgrid-demo", "a*", "--animate", "--seed", "42"]).unwrap();
        assert_eq!(cli.algorithm.algorithms(), vec![Algorithm::Astar]);
        assert!(cli.animate);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn rejects_unknown_algorithm_and_bad_seed() {
        assert!(Cli::try_parse_from(["pathgrid-demo", "greedy"]).is_err());
        assert!(Cli::try_parse_from(["pathgrid-demo", "--seed", "x"]).is_err());
    }
}
