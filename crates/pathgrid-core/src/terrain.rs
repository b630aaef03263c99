//! A weighted terrain map that can be built from text.
//!
//! [`TerrainGrid`] stores one entry weight per cell in row-major order.
//! The reserved weight [`IMPASSABLE`] marks walls. Maps can be written as
//! ASCII art:
//!
//! ```text
//! S..#
//! .9.#
//! ...E
//! ```
//!
//! | char | meaning |
//! |---|---|
//! | `.` | weight 1 |
//! | `0`–`9` | that weight |
//! | `#` | impassable |
//! | `S` / `E` | start / end marker, weight 1 |

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// Weight sentinel for cells that can never be entered.
pub const IMPASSABLE: u32 = u32::MAX;

/// Weight given to every cell of a fresh grid.
pub const DEFAULT_WEIGHT: u32 = 1;

/// A rectangular grid of entry weights with optional start/end markers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    weights: Vec<u32>,
    width: i32,
    height: i32,
    start: Option<Point>,
    end: Option<Point>,
}

impl TerrainGrid {
    /// Create a `width` × `height` grid where every cell has weight 1.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            weights: vec![DEFAULT_WEIGHT; (w as usize) * (h as usize)],
            width: w,
            height: h,
            start: None,
            end: None,
        }
    }

    /// Parse an ASCII map. See the module documentation for the notation.
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same width.
    pub fn parse(s: &str) -> Result<Self, TerrainError> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().collect();
        if lines.is_empty() || lines.iter().all(|l| l.is_empty()) {
            return Err(TerrainError::Empty);
        }
        let width = lines[0].chars().count();
        let mut grid = Self::new(width as i32, lines.len() as i32);

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TerrainError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let weight = match ch {
                    '.' => DEFAULT_WEIGHT,
                    '#' => IMPASSABLE,
                    '0'..='9' => ch as u32 - '0' as u32,
                    'S' | 'E' => {
                        let slot = if ch == 'S' {
                            &mut grid.start
                        } else {
                            &mut grid.end
                        };
                        if slot.is_some() {
                            return Err(TerrainError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        DEFAULT_WEIGHT
                    }
                    _ => return Err(TerrainError::InvalidChar { ch, pos }),
                };
                grid.set_weight(pos, weight);
            }
        }
        Ok(grid)
    }

    /// The bounding range, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Entry weight of `p`. Out-of-bounds cells report [`IMPASSABLE`].
    #[inline]
    pub fn weight(&self, p: Point) -> u32 {
        self.index(p).map_or(IMPASSABLE, |i| self.weights[i])
    }

    /// Set the entry weight of `p`. Out-of-bounds writes are ignored.
    pub fn set_weight(&mut self, p: Point, weight: u32) {
        if let Some(i) = self.index(p) {
            self.weights[i] = weight;
        }
    }

    /// Make `p` impassable.
    pub fn set_wall(&mut self, p: Point) {
        self.set_weight(p, IMPASSABLE);
    }

    /// In bounds and not impassable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.weight(p) != IMPASSABLE
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn set_start(&mut self, p: Option<Point>) {
        self.start = p;
    }

    pub fn set_end(&mut self, p: Option<Point>) {
        self.end = p;
    }

    /// Iterate over all positions and their weights, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds().iter().map(|p| (p, self.weight(p)))
    }
}

impl FromStr for TerrainGrid {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the grid back into the notation accepted by [`TerrainGrid::parse`].
///
/// Weights above 9 have no single-character form and are written as `9`.
impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = if Some(p) == self.start {
                    'S'
                } else if Some(p) == self.end {
                    'E'
                } else {
                    match self.weight(p) {
                        IMPASSABLE => '#',
                        DEFAULT_WEIGHT => '.',
                        w => char::from_digit(w.min(9), 10).unwrap_or('9'),
                    }
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a terrain map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// The map contains no cells.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map notation was found.
    InvalidChar { ch: char, pos: Point },
    /// `S` or `E` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "terrain: empty map"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "terrain: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "terrain: invalid character '{ch}' at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "terrain: duplicate marker '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "
S..#
.9.#
...E
";

    #[test]
    fn new_grid_has_unit_weights() {
        let g = TerrainGrid::new(4, 3);
        assert_eq!(g.bounds(), Range::new(0, 0, 4, 3));
        assert!(g.iter().all(|(_, w)| w == DEFAULT_WEIGHT));
        assert_eq!(g.start(), None);
    }

    #[test]
    fn set_and_get_weights() {
        let mut g = TerrainGrid::new(3, 3);
        g.set_weight(Point::new(1, 1), 10);
        g.set_wall(Point::new(2, 0));
        assert_eq!(g.weight(Point::new(1, 1)), 10);
        assert!(!g.is_passable(Point::new(2, 0)));
        // out of bounds reads as a wall and writes are dropped
        assert_eq!(g.weight(Point::new(5, 5)), IMPASSABLE);
        g.set_weight(Point::new(-1, 0), 3);
        assert!(!g.is_passable(Point::new(-1, 0)));
    }

    #[test]
    fn parse_map() {
        let g = TerrainGrid::parse(MAP).unwrap();
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(3, 2)));
        assert_eq!(g.weight(Point::new(1, 1)), 9);
        assert_eq!(g.weight(Point::new(3, 0)), IMPASSABLE);
        assert_eq!(g.weight(Point::new(3, 2)), 1);
    }

    #[test]
    fn display_round_trips_notation() {
        let g: TerrainGrid = MAP.parse().unwrap();
        assert_eq!(g.to_string(), MAP.trim());
    }

    #[test]
    fn parse_rejects_ragged_lines() {
        let err = TerrainGrid::parse("...\n..\n...").unwrap_err();
        assert_eq!(
            err,
            TerrainError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_chars() {
        let err = TerrainGrid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            TerrainError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert_eq!(err.to_string(), "terrain: invalid character 'x' at (1, 1)");
    }

    #[test]
    fn parse_rejects_duplicate_markers() {
        let err = TerrainGrid::parse("S.S").unwrap_err();
        assert!(matches!(err, TerrainError::DuplicateMarker { ch: 'S', .. }));
        assert_eq!(err.to_string(), "terrain: duplicate marker 'S' at (2, 0)");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(TerrainGrid::parse("\n\n"), Err(TerrainError::Empty));
    }
}
