//! Shared pieces for the pathgrid demo host: a built-in map, a seeded map
//! generator, and an observer that paints search progress onto text.

use std::collections::HashSet;

use pathgrid_core::{Point, TerrainGrid};
use pathgrid_search::{Observer, SearchResult};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub const MAP: &str = "
S.......#...........
.######.#.#######...
......#.#.#.....#...
.####.#...#.999.#...
.#..#.#####.999.#...
.#..#.......999.#..E
.#..#########...###.
.#.............5....
";

const RANDOM_WIDTH: i32 = 40;
const RANDOM_HEIGHT: i32 = 16;
/// Percentage of random cells that become walls.
const WALL_PCT: u32 = 22;

/// A reproducible random map with weights 1..=9, walls, and start/end in
/// opposite corners.
pub fn random_map(seed: u64) -> TerrainGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = TerrainGrid::new(RANDOM_WIDTH, RANDOM_HEIGHT);
    for p in grid.bounds().iter() {
        if rng.random_range(0..100) < WALL_PCT {
            grid.set_wall(p);
        } else if rng.random_range(0..100) < 30 {
            grid.set_weight(p, rng.random_range(2..=9));
        }
    }
    let start = Point::new(0, 0);
    let end = Point::new(RANDOM_WIDTH - 1, RANDOM_HEIGHT - 1);
    grid.set_weight(start, 1);
    grid.set_weight(end, 1);
    grid.set_start(Some(start));
    grid.set_end(Some(end));
    grid
}

/// Collects visited and path cells so they can be drawn over the map.
#[derive(Debug, Default)]
pub struct Overlay {
    visited: HashSet<Point>,
    path: HashSet<Point>,
    pub finished: Option<SearchResult>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The map with `o` on visited cells and `*` on path cells.
    pub fn render(&self, grid: &TerrainGrid) -> String {
        let base = grid.to_string();
        let mut out = String::with_capacity(base.len());
        for (y, line) in base.lines().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                out.push(if self.path.contains(&p) {
                    '*'
                } else if self.visited.contains(&p) {
                    'o'
                } else {
                    ch
                });
            }
        }
        out
    }
}

impl Observer for Overlay {
    fn cell_visited(&mut self, p: Point) {
        self.visited.insert(p);
    }

    fn path_cell(&mut self, p: Point) {
        self.path.insert(p);
    }

    fn finished(&mut self, result: &SearchResult) {
        self.finished = Some(result.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_search::{Algorithm, Driver};

    #[test]
    fn builtin_map_parses_with_markers() {
        let g = TerrainGrid::parse(MAP).unwrap();
        assert!(g.start().is_some());
        assert!(g.end().is_some());
    }

    #[test]
    fn random_map_is_reproducible() {
        assert_eq!(random_map(7), random_map(7));
        let g = random_map(7);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert!(g.is_passable(Point::new(RANDOM_WIDTH - 1, RANDOM_HEIGHT - 1)));
    }

    #[test]
    fn overlay_paints_path_and_keeps_endpoints() {
        let g = TerrainGrid::parse("S..\n.#.\n..E").unwrap();
        let (start, end) = (g.start().unwrap(), g.end().unwrap());
        let mut driver = Driver::new(&g, Algorithm::Bfs.into(), start, end, Overlay::new()).unwrap();
        driver.run_to_completion().unwrap();
        let overlay = driver.into_observer();
        let drawn = overlay.render(&g);
        assert!(drawn.starts_with('S'));
        assert!(drawn.ends_with('E'));
        assert_eq!(drawn.matches('*').count(), 3);
        assert!(overlay.finished.as_ref().is_some_and(SearchResult::is_found));
    }
}
